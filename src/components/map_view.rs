//! Interactive map view synchronized with the story's selection state.
//!
//! Owns the `MapAdapter` for the page. Without a configured map token the
//! view renders an informational placeholder and the rest of the page keeps
//! working; the map is an enhancement, never a dependency.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use lions_core::{Category, ContentStore, Emphasis, EntryId, MapAdapter};

use super::map_scene::{MapScene, SceneBackend};
use crate::context::use_map_config;

/// What the shell currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewPhase {
    /// No token configured: placeholder instead of a canvas
    Disabled,
    /// Backend construction in flight
    Loading,
    Ready,
    /// Backend construction failed: degrade like a missing token
    Failed,
}

type SharedAdapter = Rc<RefCell<Option<MapAdapter<SceneBackend>>>>;

/// Map canvas for one story.
///
/// `active_category` and `focused` mirror the page's `SelectionState`; the
/// view forwards them into the adapter, which tolerates changes that arrive
/// while the backend is still loading.
#[component]
pub fn MapView(
    store: &'static ContentStore,
    accent: &'static str,
    active_category: ReadOnlySignal<Option<Category>>,
    focused: ReadOnlySignal<Option<EntryId>>,
    on_select: EventHandler<EntryId>,
    on_reset: EventHandler<()>,
) -> Element {
    let map_config = use_map_config();
    let scene: Signal<MapScene> = use_signal(MapScene::default);
    let mut phase: Signal<ViewPhase> = use_signal(|| ViewPhase::Loading);
    let adapter: SharedAdapter = use_hook(|| Rc::new(RefCell::new(None)));

    // Mount: either degrade immediately or start the async backend load
    {
        let adapter = adapter.clone();
        use_effect(move || {
            if !map_config.read().is_enabled() {
                phase.set(ViewPhase::Disabled);
                return;
            }
            let mut created = MapAdapter::new(store);
            created.begin_loading();
            *adapter.borrow_mut() = Some(created);
            phase.set(ViewPhase::Loading);

            let adapter = adapter.clone();
            spawn(async move {
                // Suspension point standing in for the widget library fetch;
                // the user may filter or focus before this resolves
                tokio::task::yield_now().await;
                let backend = SceneBackend::new(scene, store);
                let outcome = adapter.borrow_mut().as_mut().map(|a| a.attach(backend));
                match outcome {
                    Some(Ok(())) => phase.set(ViewPhase::Ready),
                    Some(Err(e)) => {
                        tracing::warn!("Map backend failed to attach: {}", e);
                        phase.set(ViewPhase::Failed);
                    }
                    // Unmounted before the load resolved; adapter is gone
                    None => {}
                }
            });
        });
    }

    // Selection sync: filter changes restyle, focus changes fly the camera.
    // Clearing focus alone never moves the camera.
    {
        let adapter = adapter.clone();
        use_effect(move || {
            let category = active_category();
            if let Some(a) = adapter.borrow_mut().as_mut() {
                a.apply_filter(category);
            }
        });
    }
    {
        let adapter = adapter.clone();
        use_effect(move || {
            if let Some(id) = focused() {
                if let Some(a) = adapter.borrow_mut().as_mut() {
                    a.focus(id);
                }
            }
        });
    }

    // Unconditional teardown, even if the adapter never left Loading
    {
        let adapter = adapter.clone();
        use_drop(move || {
            if let Some(mut a) = adapter.borrow_mut().take() {
                a.destroy();
            }
        });
    }

    let reset = {
        let adapter = adapter.clone();
        move |_| {
            if let Some(a) = adapter.borrow_mut().as_mut() {
                a.reset();
            }
            on_reset.call(());
        }
    };

    let current = phase();
    if matches!(current, ViewPhase::Disabled | ViewPhase::Failed) {
        return rsx! {
            div { class: "map-shell",
                div { class: "map-placeholder",
                    p { class: "map-placeholder-title", "Map unavailable" }
                    p { "Set LIONS_MAP_TOKEN to light up the atlas." }
                    p { "The story continues below with the full timeline." }
                }
            }
        };
    }

    let view = scene();
    let focused_id = focused();
    let camera = view.camera;
    let layer_style = format!(
        "transform-origin: {:.2}% {:.2}%; transform: translate({:.2}%, {:.2}%) scale({:.3}); transition-duration: {}ms;",
        camera.x_pct,
        camera.y_pct,
        50.0 - camera.x_pct,
        50.0 - camera.y_pct,
        camera.scale,
        camera.duration_ms,
    );

    rsx! {
        div { class: "map-shell",
            div { class: "map-layer", style: "{layer_style}",
                svg {
                    class: "map-paths",
                    view_box: "0 0 100 100",
                    preserve_aspect_ratio: "none",
                    for path in view.paths {
                        if path.closed {
                            polygon {
                                key: "{path.id}",
                                points: "{path.points}",
                                fill: "{path.color}",
                                fill_opacity: if path.emphasis == Emphasis::Full { "0.18" } else { "0.05" },
                                stroke: "{path.color}",
                                stroke_opacity: if path.emphasis == Emphasis::Full { "0.8" } else { "0.2" },
                                stroke_width: "0.4",
                            }
                        } else {
                            polyline {
                                key: "{path.id}",
                                points: "{path.points}",
                                fill: "none",
                                stroke: "{path.color}",
                                stroke_opacity: if path.emphasis == Emphasis::Full { "0.8" } else { "0.2" },
                                stroke_width: "0.5",
                            }
                        }
                    }
                }
                for marker in view.markers {
                    button {
                        key: "{marker.id}",
                        class: {
                            let mut class = String::from("map-marker");
                            if marker.emphasis == Emphasis::Dimmed {
                                class.push_str(" dimmed");
                            }
                            if focused_id == Some(marker.id) {
                                class.push_str(" focused");
                            }
                            class
                        },
                        style: "left: {marker.x_pct}%; top: {marker.y_pct}%; background: {marker.color};",
                        title: "{marker.name}",
                        onclick: move |_| on_select.call(marker.id),
                    }
                }
            }
            if current == ViewPhase::Loading {
                div { class: "map-veil", "charting the territory…" }
            }
            if current == ViewPhase::Ready {
                button { class: "map-reset", style: "color: {accent};", onclick: reset, "Reset view" }
            }
        }
    }
}
