//! Error types for the Dancing with Lions core.

use thiserror::Error;

/// Main error type for atlas operations.
///
/// The error surface is deliberately narrow: the content stores are static
/// data validated at compile time, so the only fallible paths are the map
/// adapter's interactions with its backend.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// An entry id does not exist in the content store
    #[error("Unknown entry: {0}")]
    UnknownEntry(String),

    /// The map adapter has already been torn down
    #[error("Map adapter destroyed")]
    Destroyed,

    /// The map backend rejected an operation
    #[error("Map backend error: {0}")]
    Backend(String),
}
