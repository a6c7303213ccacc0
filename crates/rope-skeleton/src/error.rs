//! Error types for skeleton sampling.

use thiserror::Error;

/// Result type for skeleton operations.
pub type SkeletonResult<T> = Result<T, SkeletonError>;

/// Errors that can occur while building a rope skeleton.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SkeletonError {
    /// Spacing is zero, negative or not finite.
    #[error("invalid spacing: {0} (must be positive)")]
    InvalidSpacing(f64),

    /// Start and end coincide, so the rope direction is undefined.
    #[error("degenerate endpoints: start and end coincide")]
    DegenerateEndpoints,

    /// Too few points to orient a skeleton chain.
    #[error("skeleton needs at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum required points.
        required: usize,
        /// Actual point count.
        actual: usize,
    },
}

impl SkeletonError {
    /// Create a too-few-points error.
    #[must_use]
    pub fn too_few_points(required: usize, actual: usize) -> Self {
        Self::TooFewPoints { required, actual }
    }

    /// Check if this is an invalid-spacing error.
    #[must_use]
    pub fn is_invalid_spacing(&self) -> bool {
        matches!(self, Self::InvalidSpacing(_))
    }
}
