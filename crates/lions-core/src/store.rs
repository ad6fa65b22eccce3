//! Immutable content stores.
//!
//! A [`ContentStore`] is the compiled-in collection of facts behind one story:
//! points, routes, categories, the map extent, and the overview camera. Stores
//! are constructed once as `static` tables and never mutated; malformed
//! content is a build error, not a runtime fault.

use serde_json::{json, Value};

use crate::types::{CameraTarget, Category, CategoryInfo, EntryId, GeoBounds, GeoPoint, GeoRoute};

/// Read-only collection of domain records backing one story.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStore {
    points: &'static [GeoPoint],
    routes: &'static [GeoRoute],
    categories: &'static [CategoryInfo],
    bounds: GeoBounds,
    overview: CameraTarget,
}

impl ContentStore {
    pub const fn new(
        points: &'static [GeoPoint],
        routes: &'static [GeoRoute],
        categories: &'static [CategoryInfo],
        bounds: GeoBounds,
        overview: CameraTarget,
    ) -> Self {
        Self {
            points,
            routes,
            categories,
            bounds,
            overview,
        }
    }

    pub fn points(&self) -> &'static [GeoPoint] {
        self.points
    }

    pub fn routes(&self) -> &'static [GeoRoute] {
        self.routes
    }

    pub fn categories(&self) -> &'static [CategoryInfo] {
        self.categories
    }

    pub fn bounds(&self) -> GeoBounds {
        self.bounds
    }

    /// Default camera position showing the whole story extent.
    pub fn overview(&self) -> CameraTarget {
        self.overview
    }

    /// Look up a point by id. Returns `None` for ids the store never held.
    pub fn get(&self, id: EntryId) -> Option<&'static GeoPoint> {
        self.points.iter().find(|p| p.id == id)
    }

    /// Look up display metadata for a category key.
    pub fn category(&self, key: Category) -> Option<&'static CategoryInfo> {
        self.categories.iter().find(|c| c.key == key)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Export a store as a GeoJSON FeatureCollection.
///
/// Points become `Point` features, open routes `LineString`, closed routes
/// `Polygon`. Useful for inspecting story data with external GIS tooling.
pub fn to_geojson(store: &ContentStore) -> Value {
    let mut features: Vec<Value> = Vec::with_capacity(store.points().len() + store.routes().len());

    for point in store.points() {
        features.push(json!({
            "type": "Feature",
            "geometry": {
                "type": "Point",
                "coordinates": [point.coords.lng, point.coords.lat],
            },
            "properties": {
                "id": point.id.0,
                "name": point.name,
                "category": point.category.0,
                "year": point.year,
                "detail": point.detail,
            },
        }));
    }

    for route in store.routes() {
        let coords: Vec<[f64; 2]> = route.path.iter().map(|c| [c.lng, c.lat]).collect();
        let geometry = if route.closed {
            // GeoJSON polygons repeat the first position to close the ring
            let mut ring = coords.clone();
            if let Some(first) = ring.first().copied() {
                if ring.last() != Some(&first) {
                    ring.push(first);
                }
            }
            json!({ "type": "Polygon", "coordinates": [ring] })
        } else {
            json!({ "type": "LineString", "coordinates": coords })
        };
        features.push(json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "id": route.id,
                "name": route.name,
                "category": route.category.0,
            },
        }));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
