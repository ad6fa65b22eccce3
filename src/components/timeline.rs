//! Filterable timeline of story entries.

use dioxus::prelude::*;
use lions_core::{EntryId, GeoPoint};

use super::Reveal;

fn year_label(year: Option<i32>) -> String {
    match year {
        Some(y) if y < 0 => format!("{} BCE", -y),
        Some(y) => y.to_string(),
        None => "—".to_string(),
    }
}

/// Vertical timeline of the currently visible entries.
///
/// Clicking a row toggles its focus; the focused row expands to show its
/// detail text. An empty filter result renders an explicit empty state so
/// the reader never faces a silent void.
#[component]
pub fn Timeline(
    entries: Vec<&'static GeoPoint>,
    focused: Option<EntryId>,
    on_toggle: EventHandler<EntryId>,
) -> Element {
    if entries.is_empty() {
        return rsx! {
            div { class: "empty-state", "No entries match this filter." }
        };
    }

    rsx! {
        div { class: "timeline",
            for point in entries {
                Reveal { key: "{point.id}",
                    div {
                        class: if focused == Some(point.id) { "timeline-entry focused" } else { "timeline-entry" },
                        onclick: move |_| on_toggle.call(point.id),
                        p { class: "timeline-year", "{year_label(point.year)}" }
                        p { class: "timeline-name", "{point.name}" }
                        if focused == Some(point.id) {
                            p { class: "timeline-detail", "{point.detail}" }
                        }
                    }
                }
            }
        }
    }
}
