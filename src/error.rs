//! Error types for shape construction.

use thiserror::Error;

/// Errors produced by shape constructors. These are configuration errors:
/// a shape that fails to construct was never valid to simulate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    /// Circle radius must be strictly positive.
    #[error("circle radius must be positive, got {0}")]
    InvalidRadius(f64),

    /// Box width and height must both be strictly positive.
    #[error("box dimensions must be positive, got {width}x{height}")]
    InvalidBoxDimensions { width: f64, height: f64 },

    /// A polygon needs at least 3 vertices.
    #[error("polygon must have at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}
