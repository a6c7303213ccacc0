//! Skeleton points: sampled rope positions with orientation.

use nalgebra::{Isometry3, Point3, Translation3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Frame;

/// One sampled point of a rope skeleton.
///
/// Couples a position with the orientation [`Frame`] used to build that
/// point's cross-section ring. Skeleton points are immutable once created
/// and owned exclusively by the mesh build that consumes them.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkeletonPoint {
    /// Position of the point.
    pub position: Point3<f64>,
    /// Orientation basis at the point.
    pub frame: Frame,
}

impl SkeletonPoint {
    /// Create a skeleton point from a position and frame.
    #[must_use]
    pub fn new(position: Point3<f64>, frame: Frame) -> Self {
        Self { position, frame }
    }

    /// The point's world placement at build time.
    ///
    /// Inverting this pose yields the bind matrix that maps the point's
    /// world placement back to the origin, which is what rigs a vertex to
    /// follow the point after it moves.
    ///
    /// # Example
    ///
    /// ```
    /// use rope_types::{Frame, SkeletonPoint};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let point = SkeletonPoint::new(
    ///     Point3::new(2.0, 0.0, 0.0),
    ///     Frame::from_forward(Vector3::x()),
    /// );
    ///
    /// let local = point.world_pose().inverse() * point.position;
    /// assert!(local.coords.norm() < 1e-10);
    /// ```
    #[must_use]
    pub fn world_pose(&self) -> Isometry3<f64> {
        Isometry3::from_parts(Translation3::from(self.position.coords), self.frame.rotation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    #[test]
    fn world_pose_translates_origin_to_position() {
        let point = SkeletonPoint::new(
            Point3::new(1.0, -2.0, 3.0),
            Frame::from_forward(Vector3::x()),
        );

        let mapped = point.world_pose() * Point3::origin();
        assert_relative_eq!((mapped - point.position).norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn world_pose_carries_frame_rotation() {
        let frame = Frame::from_forward(Vector3::new(0.0, 0.0, -1.0));
        let point = SkeletonPoint::new(Point3::origin(), frame);

        let forward = point.world_pose() * Vector3::z();
        assert_relative_eq!((forward - frame.forward).norm(), 0.0, epsilon = 1e-10);
    }

    #[test]
    fn inverse_pose_recovers_local_origin() {
        let point = SkeletonPoint::new(
            Point3::new(4.0, 5.0, 6.0),
            Frame::from_forward(Vector3::new(1.0, 1.0, 0.0)),
        );

        let local = point.world_pose().inverse() * point.position;
        assert_relative_eq!(local.coords.norm(), 0.0, epsilon = 1e-10);
    }
}
