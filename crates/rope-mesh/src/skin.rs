//! Skin binding: bind poses and rigid bone weights.

use nalgebra::Matrix4;
use rope_types::{BoneWeight, SkeletonPoint};

use crate::ring::Ring;

/// Capture one bind pose per skeleton point.
///
/// A bind pose is the inverse of the point's world placement at build time,
/// as a homogeneous matrix. A host engine composes it with the point's
/// current pose to deform vertices relative to this rest state.
///
/// # Example
///
/// ```
/// use rope_mesh::bind_poses;
/// use rope_types::{Frame, SkeletonPoint};
/// use nalgebra::{Point3, Vector3};
///
/// let point = SkeletonPoint::new(Point3::new(2.0, 0.0, 0.0), Frame::from_forward(Vector3::x()));
/// let poses = bind_poses(&[point]);
///
/// // The bind pose maps the point's position back to the origin
/// let local = poses[0].transform_point(&point.position);
/// assert!(local.coords.norm() < 1e-10);
/// ```
#[must_use]
pub fn bind_poses(points: &[SkeletonPoint]) -> Vec<Matrix4<f64>> {
    points
        .iter()
        .map(|point| point.world_pose().inverse().to_homogeneous())
        .collect()
}

/// Rigidly bind every ring vertex to its own skeleton point.
///
/// Emits one weight per vertex in buffer order: all `size()` vertices of
/// ring `k` (center included) get bone index `k` with weight 1.0. No
/// blending between adjacent rings; each tube segment follows exactly one
/// bone.
#[must_use]
pub fn bone_weights(rings: &[Ring]) -> Vec<BoneWeight> {
    let total = rings.iter().map(|ring| ring.size() as usize).sum();
    let mut weights = Vec::with_capacity(total);

    for (bone_index, ring) in rings.iter().enumerate() {
        for _ in 0..ring.size() {
            weights.push(BoneWeight::rigid(bone_index));
        }
    }

    weights
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};
    use rope_types::Frame;

    fn chain() -> Vec<SkeletonPoint> {
        let frame = Frame::from_forward(Vector3::x());
        vec![
            SkeletonPoint::new(Point3::new(0.0, 0.0, 0.0), frame),
            SkeletonPoint::new(Point3::new(2.0, 0.0, 0.0), frame),
            SkeletonPoint::new(Point3::new(4.0, 0.0, 0.0), frame),
        ]
    }

    #[test]
    fn one_bind_pose_per_point() {
        let points = chain();
        assert_eq!(bind_poses(&points).len(), points.len());
    }

    #[test]
    fn bind_pose_sends_its_point_to_the_origin() {
        let points = chain();
        let poses = bind_poses(&points);

        for (point, pose) in points.iter().zip(&poses) {
            let local = pose.transform_point(&point.position);
            assert_relative_eq!(local.coords.norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn bind_pose_undoes_the_frame_rotation() {
        let frame = Frame::from_forward(Vector3::new(0.0, 0.0, 1.0));
        let point = SkeletonPoint::new(Point3::new(1.0, 1.0, 1.0), frame);
        let poses = bind_poses(&[point]);

        // A vertex one radius along `up` lands on the local Y axis
        let vertex = point.position + frame.up * 0.5;
        let local = poses[0].transform_point(&vertex);
        assert_relative_eq!(local.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(local.y, 0.5, epsilon = 1e-10);
        assert_relative_eq!(local.z, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn every_ring_vertex_is_bound_to_its_ring() {
        let rings = [Ring::new(0, 4), Ring::new(5, 4), Ring::new(10, 4)];
        let weights = bone_weights(&rings);

        assert_eq!(weights.len(), 15);
        for (vertex, weight) in weights.iter().enumerate() {
            assert_eq!(weight.bone_index, vertex / 5);
            assert!((weight.weight - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn weights_cover_every_vertex_exactly_once() {
        let rings = [Ring::new(0, 7), Ring::new(8, 7)];
        let weights = bone_weights(&rings);

        let vertex_total: usize = rings.iter().map(|r| r.size() as usize).sum();
        assert_eq!(weights.len(), vertex_total);
    }
}
