//! Orientation assignment along a sampled skeleton chain.

use nalgebra::{Point3, UnitQuaternion, Vector3};

use rope_types::{Frame, SkeletonPoint};

use crate::error::{SkeletonError, SkeletonResult};

/// Assign an orientation frame to every point of a skeleton chain.
///
/// The first frame is built from the first segment's direction with a
/// look-rotation against world up. Each following frame is the previous one
/// carried onto the point's local tangent (the average of its adjacent
/// segment directions at interior points), so the ring plane never twists
/// around the chain. On a straight chain every frame equals the first.
///
/// # Errors
///
/// Returns [`SkeletonError::TooFewPoints`] if fewer than 2 points are given.
///
/// # Example
///
/// ```
/// use rope_skeleton::skeleton_points;
/// use nalgebra::Point3;
///
/// let points = skeleton_points(&[
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ]).unwrap();
///
/// assert_eq!(points.len(), 3);
/// assert!((points[2].frame.forward.x - 1.0).abs() < 1e-10);
/// ```
pub fn skeleton_points(positions: &[Point3<f64>]) -> SkeletonResult<Vec<SkeletonPoint>> {
    if positions.len() < 2 {
        return Err(SkeletonError::too_few_points(2, positions.len()));
    }

    let first_forward = (positions[1] - positions[0])
        .try_normalize(f64::EPSILON)
        .unwrap_or_else(Vector3::z);

    let mut points = Vec::with_capacity(positions.len());
    points.push(SkeletonPoint::new(
        positions[0],
        Frame::from_forward(first_forward),
    ));

    for i in 1..positions.len() {
        let previous = points[i - 1].frame;

        let tangent = if i + 1 < positions.len() {
            // Interior point: average of incoming and outgoing directions
            (positions[i] - positions[i - 1]) + (positions[i + 1] - positions[i])
        } else {
            positions[i] - positions[i - 1]
        };
        let tangent = tangent
            .try_normalize(f64::EPSILON)
            .unwrap_or(previous.forward);

        points.push(SkeletonPoint::new(positions[i], carry(&previous, tangent)));
    }

    Ok(points)
}

/// Carry a frame onto a new forward direction without introducing twist.
///
/// Rotates the ring plane by the smallest rotation that maps the old
/// forward onto the new one.
fn carry(previous: &Frame, forward: Vector3<f64>) -> Frame {
    match UnitQuaternion::rotation_between(&previous.forward, &forward) {
        Some(rotation) => Frame::new(forward, rotation * previous.up, rotation * previous.cross),
        // Opposite directions leave the rotation axis ambiguous; mirror the
        // ring plane instead of picking an arbitrary axis
        None => Frame::new(forward, -previous.up, -previous.cross),
    }
}
