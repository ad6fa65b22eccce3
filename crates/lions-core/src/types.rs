//! Core types for the Dancing with Lions atlas.
//!
//! Every type here is immutable, `Copy` where possible, and
//! const-constructible so that story content can live in `static` tables.

use serde::Serialize;

/// A longitude/latitude pair in degrees (WGS 84, longitude first).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl std::fmt::Display for LngLat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lng, self.lat)
    }
}

/// Stable identifier for a content entry.
///
/// Identity is stable for the life of the page; the adapter keys its overlay
/// handles by this id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct EntryId(pub &'static str);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Category key within one story's content store.
///
/// Categories are per-story (eras for Islamic Spain, habitats for the Barbary
/// lion, and so on), so this is a slug rather than a shared enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Category(pub &'static str);

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Display metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryInfo {
    pub key: Category,
    /// Human-readable chip label
    pub label: &'static str,
    /// Accent color used for chips and markers (CSS color string)
    pub color: &'static str,
}

/// A place of interest: a city, battle site, zoo, recording, or sighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub id: EntryId,
    pub name: &'static str,
    pub coords: LngLat,
    pub category: Category,
    /// Year for timeline ordering; negative values are BCE
    pub year: Option<i32>,
    pub detail: &'static str,
}

/// An ordered coordinate sequence rendered as a single overlay.
///
/// Open paths draw routes and corridors; closed paths draw historic ranges as
/// polygons.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoRoute {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub path: &'static [LngLat],
    pub closed: bool,
}

/// Geographic extent of a story's map view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl GeoBounds {
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Project a coordinate to a (x, y) fraction of this extent.
    ///
    /// Linear equirectangular projection, clamped to `0.0..=1.0`. The y axis
    /// is inverted so north sits at the top of the scene.
    pub fn fraction_of(&self, coords: LngLat) -> (f64, f64) {
        let width = (self.east - self.west).max(f64::EPSILON);
        let height = (self.north - self.south).max(f64::EPSILON);
        let x = ((coords.lng - self.west) / width).clamp(0.0, 1.0);
        let y = ((self.north - coords.lat) / height).clamp(0.0, 1.0);
        (x, y)
    }
}

/// A camera position: center coordinate plus zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraTarget {
    pub center: LngLat,
    pub zoom: f64,
}

impl CameraTarget {
    pub const fn new(center: LngLat, zoom: f64) -> Self {
        Self { center, zoom }
    }
}
