//! Hero section opening every page.

use dioxus::prelude::*;

/// Full-width hero with kicker, serif title, and tagline.
#[component]
pub fn Hero(
    kicker: &'static str,
    title: &'static str,
    tagline: &'static str,
    /// Accent color for the title (CSS color string)
    #[props(default = "")]
    accent: &'static str,
) -> Element {
    let title_style = if accent.is_empty() {
        String::new()
    } else {
        format!("color: {accent};")
    };

    rsx! {
        header { class: "hero",
            p { class: "hero-kicker", "{kicker}" }
            h1 { class: "hero-title", style: "{title_style}", "{title}" }
            p { class: "hero-tagline", "{tagline}" }
        }
    }
}
