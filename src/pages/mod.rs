//! Page components for Dancing with Lions.

mod home;
mod story;

pub use home::Home;
pub use story::StoryPage;
