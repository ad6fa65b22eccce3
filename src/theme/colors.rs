//! Color constants for the Saharan dusk palette.

#![allow(dead_code)]

// === NIGHT (Backgrounds) ===
pub const NIGHT_DEEP: &str = "#120f0a";
pub const NIGHT_SOFT: &str = "#1a1510";
pub const NIGHT_BORDER: &str = "#2a2218";

// === SAND (Surfaces, Text) ===
pub const SAND: &str = "#e8dcc8";
pub const SAND_DIM: &str = "rgba(232, 220, 200, 0.7)";
pub const SAND_FAINT: &str = "rgba(232, 220, 200, 0.45)";

// === GOLD (Titles, Emphasis) ===
pub const GOLD: &str = "#d4a24e";
pub const GOLD_GLOW: &str = "rgba(212, 162, 78, 0.35)";

// === TERRACOTTA (Accents, Markers) ===
pub const TERRACOTTA: &str = "#b3541e";
pub const TERRACOTTA_SOFT: &str = "rgba(179, 84, 30, 0.5)";

// === OASIS (Links, Active States) ===
pub const OASIS: &str = "#4e9a8f";
pub const OASIS_GLOW: &str = "rgba(78, 154, 143, 0.3)";

// === SEMANTIC ===
pub const WARNING: &str = "#c98a2b";
pub const MUTED_BLUE: &str = "#5a7d9a";
