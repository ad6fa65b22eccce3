//! Shared page footer.

use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            p { "Dancing with Lions — stories of North African history, culture, and wildlife." }
            p { "All places and dates are drawn from the published record; corrections welcome." }
        }
    }
}
