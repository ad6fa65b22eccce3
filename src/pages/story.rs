//! Story page - one long-form, map-backed narrative.
//!
//! Owns the story's `SelectionState` and passes derived views down to the
//! filter bar, timeline, and map. The map is optional; everything else on
//! the page works identically with or without it.

use dioxus::prelude::*;
use lions_core::SelectionState;

use crate::app::Route;
use crate::components::{FilterBar, Hero, MapView, Reveal, SiteFooter, Timeline};
use crate::content::{story_by_slug, Story};

/// Handles `/story/:slug` routes.
#[component]
pub fn StoryPage(slug: String) -> Element {
    match story_by_slug(&slug) {
        Some(story) => rsx! {
            StoryBody { story }
        },
        None => rsx! {
            div { class: "not-found",
                h1 { class: "hero-title", "This trail goes cold" }
                p { class: "body-text", "No story lives at \"{slug}\"." }
                Link { to: Route::Home {}, "Back to the atlas" }
            }
        },
    }
}

#[component]
fn StoryBody(story: &'static Story) -> Element {
    let mut selection = use_signal(|| SelectionState::new(story.repeat_select));

    let (active, focused, visible) = {
        let sel = selection.read();
        (
            sel.active_category(),
            sel.focused(),
            sel.visible_entries(story.store),
        )
    };

    rsx! {
        Hero {
            kicker: story.kicker,
            title: story.title,
            tagline: story.tagline,
            accent: story.accent,
        }
        main { class: "page",
            for (i, paragraph) in story.intro.iter().enumerate() {
                Reveal { key: "{i}",
                    p { class: "body-text", "{paragraph}" }
                }
            }

            h2 { class: "section-header", "Places & moments" }
            FilterBar {
                categories: story.store.categories(),
                active,
                on_select: move |category| selection.write().select_category(category),
            }

            div { class: "story-columns",
                div {
                    Timeline {
                        entries: visible,
                        focused,
                        on_toggle: move |id| selection.write().toggle_entry(id),
                    }
                }
                div { class: "map-column",
                    MapView {
                        store: story.store,
                        accent: story.accent,
                        active_category: active,
                        focused,
                        on_select: move |id| selection.write().toggle_entry(id),
                        on_reset: move |_| selection.write().clear_focus(),
                    }
                }
            }
        }
        SiteFooter {}
    }
}
