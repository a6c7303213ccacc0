//! Fixed-spacing sampling of a straight segment.

use nalgebra::Point3;
use tracing::debug;

use crate::error::{SkeletonError, SkeletonResult};

/// Tolerance for the "still heading toward the endpoint" dot-product test.
///
/// Exact comparison against 1.0 would loop forever on accumulated
/// floating-point error; anything past the endpoint flips the dot product
/// far below this threshold.
const COLLINEAR_DOT_EPS: f64 = 1e-6;

/// Sample a straight segment into a fixed-spacing chain of points.
///
/// Walks from `start` toward `end`, emitting a point every `spacing` units.
/// The walk stops once the next position would no longer head toward `end`,
/// and `end` itself is then appended, so the endpoint is always present
/// exactly once even when `spacing` does not divide the segment length.
///
/// # Arguments
///
/// * `start` - First skeleton point, always emitted
/// * `end` - Last skeleton point, always emitted
/// * `spacing` - Distance between consecutive points
///
/// # Returns
///
/// At least two points, ordered from `start` to `end`. Every consecutive
/// pair except possibly the last is separated by exactly `spacing`.
///
/// # Errors
///
/// Returns an error if:
/// - `spacing` is zero, negative or not finite
/// - `start` and `end` coincide
///
/// # Example
///
/// ```
/// use rope_skeleton::sample_segment;
/// use nalgebra::Point3;
///
/// let points = sample_segment(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     2.0,
/// ).unwrap();
///
/// assert_eq!(points.len(), 6);
/// assert_eq!(points[0], Point3::new(0.0, 0.0, 0.0));
/// assert_eq!(points[5], Point3::new(10.0, 0.0, 0.0));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Casts only size the initial allocation; the walk itself is exact
pub fn sample_segment(
    start: Point3<f64>,
    end: Point3<f64>,
    spacing: f64,
) -> SkeletonResult<Vec<Point3<f64>>> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Err(SkeletonError::InvalidSpacing(spacing));
    }

    let span = end - start;
    let Some(direction) = span.try_normalize(f64::EPSILON) else {
        return Err(SkeletonError::DegenerateEndpoints);
    };

    let mut points = Vec::with_capacity((span.norm() / spacing) as usize + 2);
    let mut current = start;

    loop {
        points.push(current);
        current += direction * spacing;

        // Landed exactly on the endpoint
        let Some(to_end) = (end - current).try_normalize(f64::EPSILON) else {
            break;
        };

        // Stepped past the endpoint
        if (to_end.dot(&direction) - 1.0).abs() > COLLINEAR_DOT_EPS {
            break;
        }
    }

    points.push(end);

    debug!(count = points.len(), spacing, "sampled rope skeleton");

    Ok(points)
}
