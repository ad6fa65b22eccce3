//! The map adapter state machine.
//!
//! Owns the backend and every overlay handle, exclusively. Overlays are
//! created exactly once per store item, keyed by stable id, then only
//! restyled as the filter changes; they are never torn down and recreated on
//! a filter change. Teardown is unconditional and idempotent, and runs even
//! if the adapter never left `Loading`.

use std::collections::BTreeMap;

use crate::error::AtlasError;
use crate::map::backend::{Emphasis, MapBackend, FOCUS_FLIGHT_MS};
use crate::store::ContentStore;
use crate::types::{CameraTarget, Category, EntryId};

/// Zoom levels added on top of the overview zoom when focusing an entry.
pub const FOCUS_ZOOM_STEP: f64 = 2.0;

/// Adapter lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapPhase {
    /// Mounted, backend load not yet requested
    Uninitialized,
    /// Backend construction in flight; no overlays exist yet
    Loading,
    /// Backend attached, overlays live
    Ready,
    /// Torn down; every operation is a no-op
    Destroyed,
}

/// A camera movement requested while the backend was still loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraRequest {
    Focus(EntryId),
    Overview,
}

/// Latest selection state requested before `Ready`. One slot per concern,
/// last write wins.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
struct PendingView {
    filter: Option<Option<Category>>,
    camera: Option<CameraRequest>,
}

/// Live backend plus its overlay handles.
struct Scene<B: MapBackend> {
    backend: B,
    markers: BTreeMap<EntryId, B::Marker>,
    paths: Vec<(Category, B::Path)>,
}

impl<B: MapBackend> Scene<B> {
    /// Remove every overlay, then release the backend itself.
    fn teardown(mut self) {
        for (_, marker) in std::mem::take(&mut self.markers) {
            self.backend.remove_marker(marker);
        }
        for (_, path) in std::mem::take(&mut self.paths) {
            self.backend.remove_path(path);
        }
        self.backend.destroy();
    }
}

/// Component-scoped resource wrapping the map widget and its overlays.
///
/// Construction is guarded against double initialization: a second `attach`
/// is rejected, and `attach` after `destroy` releases the incoming backend
/// instead of resurrecting the adapter.
pub struct MapAdapter<B: MapBackend> {
    store: &'static ContentStore,
    phase: MapPhase,
    scene: Option<Scene<B>>,
    pending: PendingView,
    filter: Option<Category>,
    focused: Option<EntryId>,
    camera: CameraTarget,
}

impl<B: MapBackend> MapAdapter<B> {
    pub fn new(store: &'static ContentStore) -> Self {
        Self {
            store,
            phase: MapPhase::Uninitialized,
            scene: None,
            pending: PendingView::default(),
            filter: None,
            focused: None,
            camera: store.overview(),
        }
    }

    pub fn phase(&self) -> MapPhase {
        self.phase
    }

    pub fn focused(&self) -> Option<EntryId> {
        self.focused
    }

    /// The filter that is (or will be, once `Ready`) applied to overlays.
    pub fn active_filter(&self) -> Option<Category> {
        self.pending.filter.unwrap_or(self.filter)
    }

    /// Last commanded camera position.
    pub fn camera(&self) -> CameraTarget {
        self.camera
    }

    /// Number of live overlay handles. Zero unless `Ready`.
    pub fn overlay_count(&self) -> usize {
        self.scene
            .as_ref()
            .map(|s| s.markers.len() + s.paths.len())
            .unwrap_or(0)
    }

    /// Record that the backend load has been requested.
    pub fn begin_loading(&mut self) {
        if self.phase == MapPhase::Uninitialized {
            self.phase = MapPhase::Loading;
            tracing::debug!("Map adapter loading");
        }
    }

    /// Attach a constructed backend: build every overlay once, then apply
    /// whatever the user asked for while the backend was loading.
    pub fn attach(&mut self, backend: B) -> Result<(), AtlasError> {
        match self.phase {
            MapPhase::Destroyed => {
                // Unmounted before the load resolved; release the late arrival
                tracing::debug!("Backend arrived after teardown, releasing");
                backend.destroy();
                return Ok(());
            }
            MapPhase::Ready => {
                backend.destroy();
                return Err(AtlasError::Backend("already attached".into()));
            }
            MapPhase::Uninitialized | MapPhase::Loading => {}
        }

        let mut scene = Scene {
            backend,
            markers: BTreeMap::new(),
            paths: Vec::new(),
        };

        for point in self.store.points() {
            match scene.backend.add_marker(point) {
                Ok(marker) => {
                    scene.markers.insert(point.id, marker);
                }
                Err(e) => {
                    tracing::warn!("Marker creation failed for {}: {}", point.id, e);
                    scene.teardown();
                    self.fail_destroyed();
                    return Err(e);
                }
            }
        }
        for route in self.store.routes() {
            match scene.backend.add_path(route) {
                Ok(path) => scene.paths.push((route.category, path)),
                Err(e) => {
                    tracing::warn!("Path creation failed for {}: {}", route.id, e);
                    scene.teardown();
                    self.fail_destroyed();
                    return Err(e);
                }
            }
        }

        // Latest filter requested during loading wins over the default
        if let Some(filter) = self.pending.filter.take() {
            self.filter = filter;
        }
        Self::apply_emphasis(&mut scene, self.store, self.filter);

        // Replay the latest camera request, or settle on the overview
        match self.pending.camera.take() {
            Some(CameraRequest::Focus(id)) => match self.store.get(id) {
                Some(point) => {
                    self.focused = Some(id);
                    self.camera = self.focus_camera(point.coords);
                    scene.backend.fly_to(self.camera, FOCUS_FLIGHT_MS);
                }
                None => {
                    self.focused = None;
                    self.camera = self.store.overview();
                    scene.backend.jump_to(self.camera);
                }
            },
            Some(CameraRequest::Overview) => {
                self.focused = None;
                self.camera = self.store.overview();
                scene.backend.jump_to(self.camera);
            }
            None => {
                self.camera = self.store.overview();
                scene.backend.jump_to(self.camera);
            }
        }

        self.scene = Some(scene);
        self.phase = MapPhase::Ready;
        tracing::info!(
            overlays = self.overlay_count(),
            "Map adapter ready"
        );
        Ok(())
    }

    /// Set the binary emphasis of every overlay to match `category` (`None`
    /// emphasizes everything). Never moves the camera, never creates or
    /// removes an overlay. Remembered if the backend is still loading.
    pub fn apply_filter(&mut self, category: Option<Category>) {
        match self.phase {
            MapPhase::Destroyed => {}
            MapPhase::Ready => {
                self.filter = category;
                if let Some(scene) = self.scene.as_mut() {
                    Self::apply_emphasis(scene, self.store, category);
                }
            }
            MapPhase::Uninitialized | MapPhase::Loading => {
                self.pending.filter = Some(category);
            }
        }
    }

    /// Fly the camera to an entry. Fire-and-forget; a later call retargets
    /// the in-flight animation. An unknown id fails safe by clearing focus.
    pub fn focus(&mut self, id: EntryId) {
        if self.phase == MapPhase::Destroyed {
            return;
        }
        let Some(point) = self.store.get(id) else {
            tracing::warn!("Focus requested for unknown entry {}, clearing", id);
            self.focused = None;
            self.pending.camera = None;
            return;
        };
        self.focused = Some(id);
        match self.phase {
            MapPhase::Ready => {
                self.camera = self.focus_camera(point.coords);
                if let Some(scene) = self.scene.as_mut() {
                    scene.backend.fly_to(self.camera, FOCUS_FLIGHT_MS);
                }
            }
            _ => {
                self.pending.camera = Some(CameraRequest::Focus(id));
            }
        }
    }

    /// Clear focus and return the camera to the overview.
    pub fn reset(&mut self) {
        if self.phase == MapPhase::Destroyed {
            return;
        }
        self.focused = None;
        match self.phase {
            MapPhase::Ready => {
                self.camera = self.store.overview();
                if let Some(scene) = self.scene.as_mut() {
                    scene.backend.fly_to(self.camera, FOCUS_FLIGHT_MS);
                }
            }
            _ => {
                self.pending.camera = Some(CameraRequest::Overview);
            }
        }
    }

    /// Unconditional teardown. Runs from any phase, tolerates a backend that
    /// never finished constructing, and is idempotent. After this, no overlay
    /// handle is held.
    pub fn destroy(&mut self) {
        if let Some(scene) = self.scene.take() {
            scene.teardown();
        }
        if self.phase != MapPhase::Destroyed {
            tracing::debug!("Map adapter destroyed");
        }
        self.phase = MapPhase::Destroyed;
        self.pending = PendingView::default();
        self.focused = None;
    }

    /// Enter `Destroyed` after a failed attach, dropping any selection state
    /// the same way `destroy` does.
    fn fail_destroyed(&mut self) {
        self.phase = MapPhase::Destroyed;
        self.pending = PendingView::default();
        self.focused = None;
    }

    fn focus_camera(&self, center: crate::types::LngLat) -> CameraTarget {
        CameraTarget::new(center, self.store.overview().zoom + FOCUS_ZOOM_STEP)
    }

    fn apply_emphasis(scene: &mut Scene<B>, store: &ContentStore, filter: Option<Category>) {
        let Scene {
            backend,
            markers,
            paths,
        } = scene;
        for (id, marker) in markers.iter_mut() {
            let matches = match filter {
                None => true,
                Some(active) => store.get(*id).map(|p| p.category == active).unwrap_or(false),
            };
            backend.set_marker_emphasis(
                marker,
                if matches { Emphasis::Full } else { Emphasis::Dimmed },
            );
        }
        for (category, path) in paths.iter_mut() {
            let matches = filter.map(|active| *category == active).unwrap_or(true);
            backend.set_path_emphasis(
                path,
                if matches { Emphasis::Full } else { Emphasis::Dimmed },
            );
        }
    }
}

impl<B: MapBackend> Drop for MapAdapter<B> {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryInfo, GeoBounds, GeoPoint, GeoRoute, LngLat};
    use std::cell::RefCell;
    use std::rc::Rc;

    static POINTS: &[GeoPoint] = &[
        GeoPoint {
            id: EntryId("fes"),
            name: "Fes",
            coords: LngLat::new(-4.98, 34.03),
            category: Category("city"),
            year: Some(789),
            detail: "",
        },
        GeoPoint {
            id: EntryId("setif"),
            name: "Setif",
            coords: LngLat::new(5.41, 36.19),
            category: Category("sighting"),
            year: Some(1942),
            detail: "",
        },
    ];

    static ROUTES: &[GeoRoute] = &[GeoRoute {
        id: "atlas-range",
        name: "Atlas range",
        category: Category("sighting"),
        path: &[LngLat::new(-7.0, 31.0), LngLat::new(7.0, 36.0)],
        closed: true,
    }];

    static CATEGORIES: &[CategoryInfo] = &[
        CategoryInfo {
            key: Category("city"),
            label: "Cities",
            color: "#d4af37",
        },
        CategoryInfo {
            key: Category("sighting"),
            label: "Sightings",
            color: "#b3541e",
        },
    ];

    static STORE: ContentStore = ContentStore::new(
        POINTS,
        ROUTES,
        CATEGORIES,
        GeoBounds::new(-10.0, 28.0, 10.0, 38.0),
        CameraTarget::new(LngLat::new(0.0, 33.0), 4.5),
    );

    #[derive(Debug, Default)]
    struct ProbeState {
        overlays_alive: usize,
        destroyed: bool,
        flights: Vec<(CameraTarget, u32)>,
        jumps: Vec<CameraTarget>,
        emphasis: Vec<(&'static str, Emphasis)>,
    }

    type Probe = Rc<RefCell<ProbeState>>;

    struct TestBackend {
        probe: Probe,
    }

    impl MapBackend for TestBackend {
        type Marker = &'static str;
        type Path = &'static str;

        fn add_marker(&mut self, point: &GeoPoint) -> Result<Self::Marker, AtlasError> {
            self.probe.borrow_mut().overlays_alive += 1;
            Ok(point.id.0)
        }

        fn add_path(&mut self, route: &GeoRoute) -> Result<Self::Path, AtlasError> {
            self.probe.borrow_mut().overlays_alive += 1;
            Ok(route.id)
        }

        fn set_marker_emphasis(&mut self, marker: &mut Self::Marker, emphasis: Emphasis) {
            self.probe.borrow_mut().emphasis.push((marker, emphasis));
        }

        fn set_path_emphasis(&mut self, path: &mut Self::Path, emphasis: Emphasis) {
            self.probe.borrow_mut().emphasis.push((path, emphasis));
        }

        fn fly_to(&mut self, target: CameraTarget, duration_ms: u32) {
            self.probe.borrow_mut().flights.push((target, duration_ms));
        }

        fn jump_to(&mut self, target: CameraTarget) {
            self.probe.borrow_mut().jumps.push(target);
        }

        fn remove_marker(&mut self, _marker: Self::Marker) {
            self.probe.borrow_mut().overlays_alive -= 1;
        }

        fn remove_path(&mut self, _path: Self::Path) {
            self.probe.borrow_mut().overlays_alive -= 1;
        }

        fn destroy(self) {
            self.probe.borrow_mut().destroyed = true;
        }
    }

    fn probe_and_backend() -> (Probe, TestBackend) {
        let probe: Probe = Rc::new(RefCell::new(ProbeState::default()));
        let backend = TestBackend {
            probe: probe.clone(),
        };
        (probe, backend)
    }

    #[test]
    fn lifecycle_reaches_ready_with_one_overlay_per_item() {
        let (probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        assert_eq!(adapter.phase(), MapPhase::Uninitialized);

        adapter.begin_loading();
        assert_eq!(adapter.phase(), MapPhase::Loading);
        assert_eq!(adapter.overlay_count(), 0);

        adapter.attach(backend).unwrap();
        assert_eq!(adapter.phase(), MapPhase::Ready);
        assert_eq!(adapter.overlay_count(), POINTS.len() + ROUTES.len());
        // No pending camera: settle on the overview without animation
        assert_eq!(probe.borrow().jumps.last(), Some(&STORE.overview()));
    }

    #[test]
    fn selection_during_loading_is_replayed_on_attach() {
        let (probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();

        // User interacts before the widget resolves
        adapter.apply_filter(Some(Category("city")));
        adapter.apply_filter(Some(Category("sighting")));
        adapter.focus(EntryId("fes"));
        adapter.focus(EntryId("setif"));

        adapter.attach(backend).unwrap();

        assert_eq!(adapter.active_filter(), Some(Category("sighting")));
        let state = probe.borrow();
        // Latest focus wins; exactly one flight was issued
        assert_eq!(state.flights.len(), 1);
        assert_eq!(state.flights[0].0.center, LngLat::new(5.41, 36.19));
        // Emphasis reflects the latest filter
        assert!(state
            .emphasis
            .iter()
            .any(|(id, e)| *id == "fes" && *e == Emphasis::Dimmed));
        assert!(state
            .emphasis
            .iter()
            .any(|(id, e)| *id == "setif" && *e == Emphasis::Full));
    }

    #[test]
    fn focus_is_last_write_wins() {
        let (probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.attach(backend).unwrap();

        adapter.focus(EntryId("fes"));
        adapter.focus(EntryId("setif"));

        assert_eq!(adapter.camera().center, LngLat::new(5.41, 36.19));
        let state = probe.borrow();
        assert_eq!(state.flights.last().unwrap().0.center, LngLat::new(5.41, 36.19));
    }

    #[test]
    fn filter_changes_never_move_the_camera() {
        let (probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.attach(backend).unwrap();

        adapter.focus(EntryId("fes"));
        let camera_after_focus = adapter.camera();
        let flights_after_focus = probe.borrow().flights.len();

        adapter.apply_filter(Some(Category("sighting")));
        adapter.apply_filter(None);

        assert_eq!(adapter.camera(), camera_after_focus);
        assert_eq!(probe.borrow().flights.len(), flights_after_focus);
    }

    #[test]
    fn reset_returns_to_overview_and_clears_focus() {
        let (probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.attach(backend).unwrap();

        adapter.focus(EntryId("fes"));
        adapter.reset();

        assert_eq!(adapter.focused(), None);
        assert_eq!(adapter.camera(), STORE.overview());
        assert_eq!(probe.borrow().flights.last().unwrap().0, STORE.overview());
    }

    #[test]
    fn unknown_focus_clears_instead_of_erroring() {
        let (_probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.attach(backend).unwrap();

        adapter.focus(EntryId("fes"));
        adapter.focus(EntryId("atlantis"));
        assert_eq!(adapter.focused(), None);
    }

    #[test]
    fn destroy_during_loading_is_safe_and_final() {
        let (probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.focus(EntryId("fes"));

        adapter.destroy();
        assert_eq!(adapter.phase(), MapPhase::Destroyed);
        assert_eq!(adapter.overlay_count(), 0);

        // The backend resolves after unmount: it must be released untouched
        adapter.attach(backend).unwrap();
        assert_eq!(adapter.phase(), MapPhase::Destroyed);
        assert_eq!(adapter.overlay_count(), 0);
        assert!(probe.borrow().destroyed);
        assert_eq!(probe.borrow().overlays_alive, 0);
    }

    #[test]
    fn destroy_is_idempotent_and_releases_everything() {
        let (probe, backend) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.attach(backend).unwrap();
        assert!(probe.borrow().overlays_alive > 0);

        adapter.destroy();
        adapter.destroy();

        assert_eq!(probe.borrow().overlays_alive, 0);
        assert!(probe.borrow().destroyed);
        assert_eq!(adapter.overlay_count(), 0);
    }

    #[test]
    fn drop_tears_down_the_scene() {
        let (probe, backend) = probe_and_backend();
        {
            let mut adapter = MapAdapter::new(&STORE);
            adapter.begin_loading();
            adapter.attach(backend).unwrap();
        }
        assert_eq!(probe.borrow().overlays_alive, 0);
        assert!(probe.borrow().destroyed);
    }

    #[test]
    fn second_attach_is_rejected() {
        let (probe, backend) = probe_and_backend();
        let (probe2, backend2) = probe_and_backend();
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.attach(backend).unwrap();

        let err = adapter.attach(backend2).unwrap_err();
        assert!(matches!(err, AtlasError::Backend(_)));
        // The duplicate was released; the original scene is untouched
        assert!(probe2.borrow().destroyed);
        assert!(probe.borrow().overlays_alive > 0);
        assert_eq!(adapter.phase(), MapPhase::Ready);
    }
}
