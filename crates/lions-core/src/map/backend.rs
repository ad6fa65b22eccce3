//! The backend trait: everything the adapter asks of a map widget.
//!
//! The widget library is a black box consumed through exactly four
//! capabilities: overlay creation, overlay restyling, camera animation, and
//! teardown. Overlay handles are associated types so callers can never reach
//! into the widget's internals past the adapter.

use crate::error::AtlasError;
use crate::types::{CameraTarget, GeoPoint, GeoRoute};

/// Camera flight duration for focusing an entry, in milliseconds.
pub const FOCUS_FLIGHT_MS: u32 = 1000;

/// Binary overlay emphasis driven by the active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Full opacity and size: the overlay matches the filter (or no filter)
    Full,
    /// Reduced opacity: the overlay exists but is de-emphasized
    Dimmed,
}

/// Imperative map widget surface.
///
/// Implementations own the live scene; the adapter owns the implementation.
/// All methods are called from the single UI thread.
pub trait MapBackend {
    /// Opaque handle to a point overlay
    type Marker;
    /// Opaque handle to a line/polygon overlay
    type Path;

    /// Create a point overlay. Called exactly once per store point.
    fn add_marker(&mut self, point: &GeoPoint) -> Result<Self::Marker, AtlasError>;

    /// Create a line or polygon overlay. Called exactly once per store route.
    fn add_path(&mut self, route: &GeoRoute) -> Result<Self::Path, AtlasError>;

    fn set_marker_emphasis(&mut self, marker: &mut Self::Marker, emphasis: Emphasis);

    fn set_path_emphasis(&mut self, path: &mut Self::Path, emphasis: Emphasis);

    /// Animate the camera to `target`. Fire-and-forget: a later call simply
    /// retargets the in-flight animation (last-write-wins, no queueing).
    fn fly_to(&mut self, target: CameraTarget, duration_ms: u32);

    /// Move the camera without animation.
    fn jump_to(&mut self, target: CameraTarget);

    fn remove_marker(&mut self, marker: Self::Marker);

    fn remove_path(&mut self, path: Self::Path);

    /// Release the widget instance itself. Runs after every overlay has been
    /// removed.
    fn destroy(self)
    where
        Self: Sized;
}
