//! One-shot reveal latch for scroll-triggered entrance animations.
//!
//! Each visually distinct block on a story page fades in the first time it
//! becomes sufficiently visible. The latch records that single transition and
//! never reverts, even if the block scrolls back out of view. It carries no
//! visual output itself; the UI layer maps `is_revealed` onto a CSS
//! opacity/translate transition.

/// Fraction of a block that must be on-screen before it reveals.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;

/// One-shot visibility latch.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl RevealLatch {
    /// Create a latch triggering at `threshold` visible-area fraction,
    /// clamped to `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed one visibility observation. Returns `true` exactly once: on the
    /// first observation that is intersecting at or above the threshold.
    pub fn observe(&mut self, visible_fraction: f64, intersecting: bool) -> bool {
        if self.revealed {
            return false;
        }
        if intersecting && visible_fraction >= self.threshold {
            self.revealed = true;
            return true;
        }
        false
    }

    /// Reveal unconditionally. Used when visibility data is unavailable so
    /// content fails open to visible rather than staying hidden.
    pub fn force(&mut self) {
        self.revealed = true;
    }
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(DEFAULT_REVEAL_THRESHOLD)
    }
}
