//! Shared context for Dancing with Lions components.
//!
//! The only global state is the map configuration resolved at startup.

use dioxus::prelude::*;
use lions_core::MapConfig;

/// Hook to access the map configuration from context.
///
/// # Example
///
/// ```ignore
/// let config = use_map_config();
/// if config.read().is_enabled() {
///     // construct a map adapter
/// }
/// ```
pub fn use_map_config() -> Signal<MapConfig> {
    use_context::<Signal<MapConfig>>()
}
