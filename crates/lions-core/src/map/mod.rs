//! Map adapter: the one stateful resource in the system.
//!
//! [`MapBackend`] is the seam to the third-party widget; [`MapAdapter`] owns
//! a backend instance plus its overlay handles and walks the lifecycle
//! `Uninitialized → Loading → Ready → Destroyed`, remembering selection
//! changes issued while the backend is still loading.

mod adapter;
mod backend;

pub use adapter::{CameraRequest, MapAdapter, MapPhase, FOCUS_ZOOM_STEP};
pub use backend::{Emphasis, MapBackend, FOCUS_FLIGHT_MS};
