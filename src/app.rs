use dioxus::prelude::*;
use lions_core::MapConfig;

use crate::pages::{Home, StoryPage};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Story index
/// - `/story/:slug` - One long-form story page
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/story/:slug")]
    StoryPage { slug: String },
}

/// Root application component.
///
/// Provides global styles, the map configuration context, and routing.
#[component]
pub fn App() -> Element {
    // Resolved once at startup; components read it to decide whether a map
    // view activates or degrades to its placeholder
    let map_config: Signal<MapConfig> = use_signal(crate::map_config);
    use_context_provider(|| map_config);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
