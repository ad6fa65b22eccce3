//! Scene backend: the concrete map widget behind the adapter seam.
//!
//! Implements `lions_core::MapBackend` by projecting overlays into a
//! [`MapScene`] value held in a Dioxus signal; the map view renders that
//! scene as positioned markers and SVG paths, and camera flights become CSS
//! transform transitions (which retarget naturally, matching the adapter's
//! last-write-wins contract).
//!
//! All writes go through `try_write` so a backend outliving its component's
//! signals degrades to silence instead of panicking.

use dioxus::prelude::*;
use lions_core::{
    AtlasError, CameraTarget, ContentStore, Emphasis, EntryId, GeoPoint, GeoRoute, MapBackend,
};

/// One rendered point overlay, in percent coordinates of the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerVisual {
    pub id: EntryId,
    pub name: &'static str,
    pub x_pct: f64,
    pub y_pct: f64,
    pub color: &'static str,
    pub emphasis: Emphasis,
}

/// One rendered line/polygon overlay as an SVG points string.
#[derive(Debug, Clone, PartialEq)]
pub struct PathVisual {
    pub id: &'static str,
    pub points: String,
    pub color: &'static str,
    pub closed: bool,
    pub emphasis: Emphasis,
}

/// Camera state expressed as a CSS transform target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraVisual {
    pub x_pct: f64,
    pub y_pct: f64,
    pub scale: f64,
    pub duration_ms: u32,
}

impl Default for CameraVisual {
    fn default() -> Self {
        Self {
            x_pct: 50.0,
            y_pct: 50.0,
            scale: 1.0,
            duration_ms: 0,
        }
    }
}

/// Everything the map view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapScene {
    pub markers: Vec<MarkerVisual>,
    pub paths: Vec<PathVisual>,
    pub camera: CameraVisual,
}

/// Map backend rendering into a reactive [`MapScene`].
pub struct SceneBackend {
    scene: Signal<MapScene>,
    store: &'static ContentStore,
}

impl SceneBackend {
    pub fn new(scene: Signal<MapScene>, store: &'static ContentStore) -> Self {
        Self { scene, store }
    }

    fn project(&self, coords: lions_core::LngLat) -> (f64, f64) {
        let (x, y) = self.store.bounds().fraction_of(coords);
        (x * 100.0, y * 100.0)
    }

    fn color_for(&self, category: lions_core::Category) -> &'static str {
        self.store
            .category(category)
            .map(|c| c.color)
            .unwrap_or("#d4a24e")
    }

    fn camera_visual(&self, target: CameraTarget, duration_ms: u32) -> CameraVisual {
        let (x_pct, y_pct) = self.project(target.center);
        // Zoom maps exponentially onto scene scale, clamped to keep the
        // stylized scene legible
        let scale = 2f64
            .powf(target.zoom - self.store.overview().zoom)
            .clamp(1.0, 8.0);
        CameraVisual {
            x_pct,
            y_pct,
            scale,
            duration_ms,
        }
    }
}

impl MapBackend for SceneBackend {
    type Marker = EntryId;
    type Path = &'static str;

    fn add_marker(&mut self, point: &GeoPoint) -> Result<EntryId, AtlasError> {
        let (x_pct, y_pct) = self.project(point.coords);
        let visual = MarkerVisual {
            id: point.id,
            name: point.name,
            x_pct,
            y_pct,
            color: self.color_for(point.category),
            emphasis: Emphasis::Full,
        };
        if let Ok(mut scene) = self.scene.try_write() {
            scene.markers.push(visual);
        }
        Ok(point.id)
    }

    fn add_path(&mut self, route: &GeoRoute) -> Result<&'static str, AtlasError> {
        let points = route
            .path
            .iter()
            .map(|c| {
                let (x, y) = self.project(*c);
                format!("{x:.2},{y:.2}")
            })
            .collect::<Vec<_>>()
            .join(" ");
        let visual = PathVisual {
            id: route.id,
            points,
            color: self.color_for(route.category),
            closed: route.closed,
            emphasis: Emphasis::Full,
        };
        if let Ok(mut scene) = self.scene.try_write() {
            scene.paths.push(visual);
        }
        Ok(route.id)
    }

    fn set_marker_emphasis(&mut self, marker: &mut EntryId, emphasis: Emphasis) {
        if let Ok(mut scene) = self.scene.try_write() {
            if let Some(m) = scene.markers.iter_mut().find(|m| m.id == *marker) {
                m.emphasis = emphasis;
            }
        }
    }

    fn set_path_emphasis(&mut self, path: &mut &'static str, emphasis: Emphasis) {
        if let Ok(mut scene) = self.scene.try_write() {
            if let Some(p) = scene.paths.iter_mut().find(|p| p.id == *path) {
                p.emphasis = emphasis;
            }
        }
    }

    fn fly_to(&mut self, target: CameraTarget, duration_ms: u32) {
        let camera = self.camera_visual(target, duration_ms);
        if let Ok(mut scene) = self.scene.try_write() {
            scene.camera = camera;
        }
    }

    fn jump_to(&mut self, target: CameraTarget) {
        let camera = self.camera_visual(target, 0);
        if let Ok(mut scene) = self.scene.try_write() {
            scene.camera = camera;
        }
    }

    fn remove_marker(&mut self, marker: EntryId) {
        if let Ok(mut scene) = self.scene.try_write() {
            scene.markers.retain(|m| m.id != marker);
        }
    }

    fn remove_path(&mut self, path: &'static str) {
        if let Ok(mut scene) = self.scene.try_write() {
            scene.paths.retain(|p| p.id != path);
        }
    }

    fn destroy(mut self) {
        if let Ok(mut scene) = self.scene.try_write() {
            *scene = MapScene::default();
        }
    }
}
