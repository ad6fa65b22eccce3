//! UI components for Dancing with Lions.

mod filter_bar;
mod hero;
mod map_scene;
mod map_view;
mod reveal;
mod site_footer;
mod story_card;
mod timeline;

pub use filter_bar::FilterBar;
pub use hero::Hero;
pub use map_scene::{MapScene, SceneBackend};
pub use map_view::MapView;
pub use reveal::Reveal;
pub use site_footer::SiteFooter;
pub use story_card::StoryCard;
pub use timeline::Timeline;
