//! Category filter chips.

use dioxus::prelude::*;
use lions_core::{Category, CategoryInfo};

/// Horizontal row of category chips with an "All" chip in front.
///
/// The component only reports what was clicked; whether re-selecting the
/// active chip clears the filter is the page's `RepeatSelect` policy.
#[component]
pub fn FilterBar(
    categories: &'static [CategoryInfo],
    active: Option<Category>,
    on_select: EventHandler<Option<Category>>,
) -> Element {
    rsx! {
        div { class: "filter-bar",
            button {
                class: if active.is_none() { "filter-chip active" } else { "filter-chip" },
                onclick: move |_| on_select.call(None),
                "All"
            }
            for info in categories {
                button {
                    key: "{info.key}",
                    class: if active == Some(info.key) { "filter-chip active" } else { "filter-chip" },
                    style: "border-color: {info.color};",
                    onclick: move |_| on_select.call(Some(info.key)),
                    "{info.label}"
                }
            }
        }
    }
}
