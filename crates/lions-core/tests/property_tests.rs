//! Property-based tests for selection state and the map adapter.
//!
//! Uses proptest to run randomized operation sequences against a fixture
//! store and check the invariants that hold for every interleaving.

use std::cell::RefCell;
use std::rc::Rc;

use proptest::prelude::*;

use lions_core::{
    AtlasError, CameraTarget, Category, CategoryInfo, ContentStore, Emphasis, EntryId, GeoBounds,
    GeoPoint, GeoRoute, LngLat, MapAdapter, MapBackend, RepeatSelect, RevealLatch, SelectionState,
    FOCUS_ZOOM_STEP,
};

static POINTS: &[GeoPoint] = &[
    GeoPoint {
        id: EntryId("p0"),
        name: "P0",
        coords: LngLat::new(-9.2, 32.3),
        category: Category("alpha"),
        year: Some(1500),
        detail: "",
    },
    GeoPoint {
        id: EntryId("p1"),
        name: "P1",
        coords: LngLat::new(-7.6, 33.6),
        category: Category("beta"),
        year: Some(1600),
        detail: "",
    },
    GeoPoint {
        id: EntryId("p2"),
        name: "P2",
        coords: LngLat::new(-6.8, 34.0),
        category: Category("alpha"),
        year: Some(1700),
        detail: "",
    },
    GeoPoint {
        id: EntryId("p3"),
        name: "P3",
        coords: LngLat::new(-5.0, 35.8),
        category: Category("gamma"),
        year: None,
        detail: "",
    },
    GeoPoint {
        id: EntryId("p4"),
        name: "P4",
        coords: LngLat::new(-4.0, 31.9),
        category: Category("beta"),
        year: Some(1900),
        detail: "",
    },
];

static CATEGORIES: &[CategoryInfo] = &[
    CategoryInfo {
        key: Category("alpha"),
        label: "Alpha",
        color: "#d4af37",
    },
    CategoryInfo {
        key: Category("beta"),
        label: "Beta",
        color: "#00d4aa",
    },
    CategoryInfo {
        key: Category("gamma"),
        label: "Gamma",
        color: "#b3541e",
    },
];

static STORE: ContentStore = ContentStore::new(
    POINTS,
    &[],
    CATEGORIES,
    GeoBounds::new(-10.0, 30.0, -3.0, 37.0),
    CameraTarget::new(LngLat::new(-6.5, 33.5), 5.0),
);

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations a user can perform on a story page
#[derive(Debug, Clone, Copy)]
enum PageOp {
    SelectCategory(Option<usize>), // Index into CATEGORIES
    ToggleEntry(usize),            // Index into POINTS
    Focus(usize),
    Reset,
}

fn page_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<PageOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => prop::option::of(0..CATEGORIES.len()).prop_map(PageOp::SelectCategory),
            3 => (0..POINTS.len()).prop_map(PageOp::ToggleEntry),
            2 => (0..POINTS.len()).prop_map(PageOp::Focus),
            1 => Just(PageOp::Reset),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Minimal counting backend
// ============================================================================

#[derive(Debug, Default)]
struct Counters {
    overlays: usize,
    camera: Option<CameraTarget>,
}

struct CountingBackend {
    counters: Rc<RefCell<Counters>>,
}

impl MapBackend for CountingBackend {
    type Marker = ();
    type Path = ();

    fn add_marker(&mut self, _point: &GeoPoint) -> Result<(), AtlasError> {
        self.counters.borrow_mut().overlays += 1;
        Ok(())
    }

    fn add_path(&mut self, _route: &GeoRoute) -> Result<(), AtlasError> {
        self.counters.borrow_mut().overlays += 1;
        Ok(())
    }

    fn set_marker_emphasis(&mut self, _marker: &mut (), _emphasis: Emphasis) {}
    fn set_path_emphasis(&mut self, _path: &mut (), _emphasis: Emphasis) {}

    fn fly_to(&mut self, target: CameraTarget, _duration_ms: u32) {
        self.counters.borrow_mut().camera = Some(target);
    }

    fn jump_to(&mut self, target: CameraTarget) {
        self.counters.borrow_mut().camera = Some(target);
    }

    fn remove_marker(&mut self, _marker: ()) {
        self.counters.borrow_mut().overlays -= 1;
    }

    fn remove_path(&mut self, _path: ()) {
        self.counters.borrow_mut().overlays -= 1;
    }

    fn destroy(self) {}
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// After any operation sequence, the visible set is exactly the entries
    /// of the active category (or everything when no filter is active).
    #[test]
    fn visible_set_matches_active_category(ops in page_ops_strategy(40)) {
        let mut selection = SelectionState::new(RepeatSelect::Clears);
        for op in ops {
            match op {
                PageOp::SelectCategory(idx) => {
                    selection.select_category(idx.map(|i| CATEGORIES[i].key));
                }
                PageOp::ToggleEntry(i) => selection.toggle_entry(POINTS[i].id),
                PageOp::Focus(_) | PageOp::Reset => {}
            }

            let visible = selection.visible_entries(&STORE);
            match selection.active_category() {
                None => prop_assert_eq!(visible.len(), STORE.len()),
                Some(active) => {
                    prop_assert!(visible.iter().all(|p| p.category == active));
                    let expected = STORE.points().iter().filter(|p| p.category == active).count();
                    prop_assert_eq!(visible.len(), expected);
                }
            }
        }
    }

    /// Clearing the filter restores the full collection from any state.
    #[test]
    fn clearing_filter_always_restores_everything(ops in page_ops_strategy(30)) {
        let mut selection = SelectionState::new(RepeatSelect::Keeps);
        for op in ops {
            if let PageOp::SelectCategory(idx) = op {
                selection.select_category(idx.map(|i| CATEGORIES[i].key));
            }
        }
        selection.select_category(None);
        prop_assert_eq!(selection.visible_entries(&STORE).len(), STORE.len());
    }

    /// Toggling the same entry twice round-trips when focus started empty or
    /// on that entry. When another entry was focused, the first toggle steals
    /// focus and the second clears it, so the pair always lands on `None`.
    #[test]
    fn double_toggle_lands_where_single_focus_semantics_demand(
        ops in page_ops_strategy(20),
        i in 0..POINTS.len(),
    ) {
        let mut selection = SelectionState::new(RepeatSelect::Clears);
        for op in ops {
            match op {
                PageOp::SelectCategory(idx) => {
                    selection.select_category(idx.map(|j| CATEGORIES[j].key));
                }
                PageOp::ToggleEntry(j) => selection.toggle_entry(POINTS[j].id),
                _ => {}
            }
        }
        let before = selection.focused();
        selection.toggle_entry(POINTS[i].id);
        selection.toggle_entry(POINTS[i].id);
        let expected = match before {
            None => None,
            Some(id) if id == POINTS[i].id => Some(id),
            // A different entry was focused: the first toggle replaced it
            Some(_) => None,
        };
        prop_assert_eq!(selection.focused(), expected);
    }

    /// Whatever the operation order, the camera ends at the last focused
    /// entry's coordinates (or the overview after a trailing reset), and
    /// overlay count never changes while the adapter is ready.
    #[test]
    fn camera_tracks_last_write(ops in page_ops_strategy(40)) {
        let counters = Rc::new(RefCell::new(Counters::default()));
        let backend = CountingBackend { counters: counters.clone() };
        let mut adapter = MapAdapter::new(&STORE);
        adapter.begin_loading();
        adapter.attach(backend).unwrap();
        let overlays = counters.borrow().overlays;

        let mut last_camera = STORE.overview();
        for op in ops {
            match op {
                PageOp::SelectCategory(idx) => {
                    adapter.apply_filter(idx.map(|i| CATEGORIES[i].key));
                }
                PageOp::ToggleEntry(_) => {}
                PageOp::Focus(i) => {
                    adapter.focus(POINTS[i].id);
                    last_camera = CameraTarget::new(
                        POINTS[i].coords,
                        STORE.overview().zoom + FOCUS_ZOOM_STEP,
                    );
                }
                PageOp::Reset => {
                    adapter.reset();
                    last_camera = STORE.overview();
                }
            }
            prop_assert_eq!(counters.borrow().overlays, overlays);
        }
        prop_assert_eq!(adapter.camera(), last_camera);
        prop_assert_eq!(counters.borrow().camera.unwrap_or(STORE.overview()), last_camera);
    }

    /// The reveal latch fires at most once over any observation sequence and
    /// never reverts.
    #[test]
    fn reveal_latch_fires_at_most_once(
        observations in prop::collection::vec((0.0f64..=1.0, any::<bool>()), 0..50),
        threshold in 0.0f64..=1.0,
    ) {
        let mut latch = RevealLatch::new(threshold);
        let mut fired = 0;
        let mut was_revealed = false;
        for (ratio, intersecting) in observations {
            if latch.observe(ratio, intersecting) {
                fired += 1;
            }
            // Once revealed, always revealed
            if was_revealed {
                prop_assert!(latch.is_revealed());
            }
            was_revealed = latch.is_revealed();
        }
        prop_assert!(fired <= 1);
        prop_assert_eq!(fired == 1, latch.is_revealed());
    }
}
