//! Dancing with Lions Core Library
//!
//! Headless domain logic for the Dancing with Lions atlas: immutable content
//! stores of curated geographic facts, the filter/selection state that narrows
//! them, the one-shot reveal latch behind scroll-triggered entrance
//! animations, and the map adapter state machine that keeps an imperatively
//! managed map scene in sync with the user's selection.
//!
//! ## Overview
//!
//! Each story ships as a compiled-in [`ContentStore`]: points, routes, and
//! categories that never change for the life of the page. The UI layer owns a
//! [`SelectionState`] per story and, when a map token is configured, a
//! [`MapAdapter`] wrapping whatever backend implements [`MapBackend`]. The
//! adapter is the only stateful resource in the system; everything else is a
//! pure function of (store, selection).
//!
//! ## Quick Start
//!
//! ```ignore
//! use lions_core::{MapAdapter, SelectionState, RepeatSelect};
//!
//! let store = my_story::store();
//! let mut selection = SelectionState::new(RepeatSelect::Clears);
//!
//! selection.select_category(Some(store.categories()[0].key));
//! for point in selection.visible_entries(store) {
//!     println!("{} ({})", point.name, point.category);
//! }
//!
//! let mut adapter = MapAdapter::new(store);
//! adapter.begin_loading();
//! adapter.attach(backend)?;
//! adapter.focus(store.points()[0].id);
//! ```

pub mod config;
pub mod error;
pub mod map;
pub mod reveal;
pub mod selection;
pub mod store;
pub mod types;

// Re-exports
pub use config::MapConfig;
pub use error::AtlasError;
pub use map::{
    CameraRequest, Emphasis, MapAdapter, MapBackend, MapPhase, FOCUS_FLIGHT_MS, FOCUS_ZOOM_STEP,
};
pub use reveal::{RevealLatch, DEFAULT_REVEAL_THRESHOLD};
pub use selection::{RepeatSelect, SelectionState};
pub use store::ContentStore;
pub use types::*;
