//! Error types for tube mesh generation.

use thiserror::Error;

/// Result type for tube mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur during tube mesh generation.
///
/// All variants are detected before any buffer is allocated, so a failed
/// call never leaves a partially built mesh behind.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Too few skeleton points for a closed tube.
    #[error("tube needs at least {required} skeleton points, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual point count.
        actual: usize,
    },

    /// Ring resolution is below the minimum for a closed tube.
    #[error("resolution must be at least {min}, got {actual}")]
    ResolutionOutOfRange {
        /// Minimum supported resolution.
        min: usize,
        /// Requested resolution.
        actual: usize,
    },

    /// Radius is zero, negative or not finite.
    #[error("invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),
}

impl MeshError {
    /// Create an insufficient-points error.
    #[must_use]
    pub fn insufficient_points(required: usize, actual: usize) -> Self {
        Self::InsufficientPoints { required, actual }
    }

    /// Check if this is an insufficient-points error.
    #[must_use]
    pub fn is_insufficient_points(&self) -> bool {
        matches!(self, Self::InsufficientPoints { .. })
    }
}
