//! Story index card.

use dioxus::prelude::*;

use crate::app::Route;
use crate::content::Story;

/// Card on the home grid linking to one story.
#[component]
pub fn StoryCard(story: &'static Story) -> Element {
    let entries = story.store.len();
    let places = if entries == 1 { "place" } else { "places" };

    rsx! {
        Link {
            class: "story-card",
            to: Route::StoryPage { slug: story.slug.to_string() },
            h2 { class: "story-card-title", style: "color: {story.accent};", "{story.title}" }
            p { class: "story-card-tagline", "{story.tagline}" }
            p { class: "story-card-meta", "{entries} {places} · {story.store.categories().len()} categories" }
        }
    }
}
