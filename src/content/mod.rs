//! Compiled-in story content.
//!
//! Each module defines one story: its prose, its categories, and its
//! `ContentStore` of places. Content is authored as `static` tables and
//! versioned with the binary; there is no runtime loading step, and a
//! malformed entry is a build error. The registry tests below keep the
//! cross-story invariants honest (unique slugs, unique entry ids, declared
//! categories).

use lions_core::{ContentStore, RepeatSelect};

mod free_people;
mod gnawa_atlas;
mod guanche_ghost;
mod islamic_spain;
mod last_lions;
mod lions_road;

/// One long-form story: prose plus its content store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Story {
    /// URL path segment under `/story/`
    pub slug: &'static str,
    pub title: &'static str,
    pub kicker: &'static str,
    pub tagline: &'static str,
    /// Introductory paragraphs rendered above the timeline
    pub intro: &'static [&'static str],
    /// Accent color for titles and the map reset control
    pub accent: &'static str,
    /// What re-selecting the active filter chip does on this page
    pub repeat_select: RepeatSelect,
    pub store: &'static ContentStore,
}

/// Every story, in front-page order.
pub static STORIES: &[&Story] = &[
    &islamic_spain::STORY,
    &last_lions::STORY,
    &lions_road::STORY,
    &gnawa_atlas::STORY,
    &guanche_ghost::STORY,
    &free_people::STORY,
];

/// Look up a story by its URL slug.
pub fn story_by_slug(slug: &str) -> Option<&'static Story> {
    STORIES.iter().copied().find(|s| s.slug == slug)
}
