//! Error types for cargopack.

use thiserror::Error;

/// Result type alias for cargopack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or optimizing a loading plan.
#[derive(Debug, Error)]
pub enum Error {
    /// A truck or box with a non-positive extent, negative weight, or empty id.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Optimizer parameters outside their documented ranges.
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    /// Two input boxes share the same identifier.
    #[error("Duplicate box id: {0}")]
    DuplicateId(String),

    /// Request or response (de)serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}
