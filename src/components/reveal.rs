//! Reveal-on-scroll wrapper.
//!
//! Wraps a block of content and fades it in the first time it becomes
//! sufficiently visible. The one-shot latch lives in `lions_core::reveal`;
//! this component only binds it to the element's visibility events and a CSS
//! transition. If visibility data is unavailable the block fails open to
//! visible.

use dioxus::prelude::*;
use lions_core::{RevealLatch, DEFAULT_REVEAL_THRESHOLD};

/// One-shot fade/translate entrance for a content block.
#[component]
pub fn Reveal(
    /// Fraction of the block that must be on-screen to trigger
    #[props(default = DEFAULT_REVEAL_THRESHOLD)]
    threshold: f64,
    #[props(default = String::new())] class: String,
    children: Element,
) -> Element {
    let mut latch = use_signal(|| RevealLatch::new(threshold));
    let revealed = latch.read().is_revealed();

    rsx! {
        div {
            class: if revealed { "reveal revealed {class}" } else { "reveal {class}" },
            onvisible: move |evt| {
                if latch.peek().is_revealed() {
                    return;
                }
                let data = evt.data();
                // Missing observer data fails open to visible
                let intersecting = data.is_intersecting().unwrap_or(true);
                let ratio = data.get_intersection_ratio().unwrap_or(1.0);
                if intersecting && ratio >= latch.peek().threshold() {
                    latch.write().observe(ratio, intersecting);
                }
            },
            {children}
        }
    }
}
