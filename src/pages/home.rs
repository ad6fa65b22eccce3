//! Story index - the front page.

use dioxus::prelude::*;

use crate::components::{Hero, Reveal, SiteFooter, StoryCard};
use crate::content::STORIES;

/// Front page listing every story.
#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {
            kicker: "Dancing with Lions",
            title: "North Africa, told in places",
            tagline: "Long-form stories of Amazigh identity, Andalusi memory, Gnawa music, and the lions that once walked the Atlas — each one mapped, dated, and sourced.",
        }
        main { class: "page",
            Reveal {
                p { class: "body-text",
                    "Every story below is built from a small atlas of real places: cities, battle sites, zawiyas, zoos, last-sighting valleys. Filter them, follow them across the map, and read the record behind each point."
                }
            }
            div { class: "story-grid",
                for story in STORIES {
                    Reveal { key: "{story.slug}",
                        StoryCard { story: *story }
                    }
                }
            }
        }
        SiteFooter {}
    }
}
