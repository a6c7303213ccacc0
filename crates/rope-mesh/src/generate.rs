//! Tube mesh assembly.

use nalgebra::Vector2;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rope_types::{RopeMesh, SkeletonPoint};

use crate::error::{MeshError, MeshResult};
use crate::ring::build_ring;
use crate::skin::{bind_poses, bone_weights};
use crate::tube::{cap_triangles, triangle_count, wall_triangles, CapEnd};

/// Advisory ceiling on ring resolution.
///
/// Not a hard limit: resolutions above it generate correctly, but vertex
/// counts grow linearly with little visual gain, so crossing it logs a
/// warning.
pub const SOFT_RESOLUTION_LIMIT: usize = 25;

/// Parameters for tube mesh generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TubeParams {
    /// Perimeter vertices per cross-section ring.
    pub resolution: usize,
    /// Tube radius.
    pub radius: f64,
}

impl Default for TubeParams {
    fn default() -> Self {
        Self {
            resolution: 10,
            radius: 0.5,
        }
    }
}

impl TubeParams {
    /// Set the ring resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the tube radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }
}

/// Generate a skinned tube mesh around an oriented skeleton chain.
///
/// One cross-section ring per skeleton point (center vertex first, then the
/// perimeter), quad walls between adjacent rings, a triangle fan capping
/// each end. UVs are a planar projection of each vertex's X and Y
/// coordinates; normals are derived from the final face list; skinning data
/// binds every vertex rigidly to its own ring.
///
/// The call is a pure function over its inputs: identical input produces
/// bit-identical buffers. Buffer sizes are computed exactly up front, so
/// the fill passes never reallocate.
///
/// # Errors
///
/// Returns an error, before any allocation, if:
/// - fewer than 2 skeleton points are supplied
/// - `resolution` is below 2
/// - `radius` is not a positive finite number
///
/// # Example
///
/// ```
/// use rope_mesh::{generate_tube_mesh, TubeParams};
/// use rope_types::{Frame, SkeletonPoint};
/// use nalgebra::{Point3, Vector3};
///
/// let frame = Frame::from_forward(Vector3::x());
/// let points = vec![
///     SkeletonPoint::new(Point3::new(0.0, 0.0, 0.0), frame),
///     SkeletonPoint::new(Point3::new(2.0, 0.0, 0.0), frame),
/// ];
///
/// let mesh = generate_tube_mesh(&points, &TubeParams::default().with_resolution(6)).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 14);
/// assert_eq!(mesh.face_count(), 24);
/// ```
#[allow(clippy::cast_possible_truncation)]
// Vertex indices are u32; meshes beyond 4B vertices are unsupported by design
pub fn generate_tube_mesh(points: &[SkeletonPoint], params: &TubeParams) -> MeshResult<RopeMesh> {
    if points.len() < 2 {
        return Err(MeshError::insufficient_points(2, points.len()));
    }

    if params.resolution < 2 {
        return Err(MeshError::ResolutionOutOfRange {
            min: 2,
            actual: params.resolution,
        });
    }

    if !params.radius.is_finite() || params.radius <= 0.0 {
        return Err(MeshError::InvalidRadius(params.radius));
    }

    if params.resolution > SOFT_RESOLUTION_LIMIT {
        warn!(
            resolution = params.resolution,
            limit = SOFT_RESOLUTION_LIMIT,
            "ring resolution above the advisory ceiling"
        );
    }

    let ring_count = points.len();
    let vertex_total = ring_count * (params.resolution + 1);
    let face_total = triangle_count(params.resolution, ring_count);

    debug!(
        rings = ring_count,
        vertices = vertex_total,
        faces = face_total,
        "generating tube mesh"
    );

    let mut mesh = RopeMesh::with_capacity(vertex_total, face_total, ring_count);

    let resolution = params.resolution as u32;
    let mut rings = Vec::with_capacity(ring_count);
    for point in points {
        rings.push(build_ring(point, params.radius, resolution, &mut mesh.vertices));
    }

    cap_triangles(rings[0], CapEnd::Start, &mut mesh.faces);
    for pair in rings.windows(2) {
        wall_triangles(pair[0], pair[1], &mut mesh.faces);
    }
    cap_triangles(rings[ring_count - 1], CapEnd::End, &mut mesh.faces);

    // Planar UV map: each vertex's X/Y projects directly to U/V
    let RopeMesh { vertices, uvs, .. } = &mut mesh;
    uvs.extend(vertices.iter().map(|v| Vector2::new(v.x, v.y)));

    mesh.bind_poses = bind_poses(points);
    mesh.bone_weights = bone_weights(&rings);
    mesh.recompute_normals();

    debug_assert_eq!(mesh.vertex_count(), vertex_total);
    debug_assert_eq!(mesh.face_count(), face_total);

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        bones = mesh.bone_count(),
        "tube mesh complete"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};
    use rope_skeleton::{sample_segment, skeleton_points};

    fn straight_chain(length: f64, spacing: f64) -> Vec<SkeletonPoint> {
        let positions = sample_segment(
            Point3::origin(),
            Point3::new(length, 0.0, 0.0),
            spacing,
        )
        .unwrap();
        skeleton_points(&positions).unwrap()
    }

    /// Sum of signed tetrahedron volumes; positive for a closed mesh with
    /// outward winding.
    fn signed_volume(mesh: &RopeMesh) -> f64 {
        let mut volume = 0.0;
        for &[i0, i1, i2] in &mesh.faces {
            let v0 = mesh.vertices[i0 as usize].coords;
            let v1 = mesh.vertices[i1 as usize].coords;
            let v2 = mesh.vertices[i2 as usize].coords;
            volume += v0.dot(&v1.cross(&v2));
        }
        volume / 6.0
    }

    #[test]
    fn concrete_scenario() {
        // 10 units at spacing 2: skeleton points at x = 0, 2, 4, 6, 8, 10
        let points = straight_chain(10.0, 2.0);
        assert_eq!(points.len(), 6);

        let params = TubeParams::default().with_resolution(4);
        let mesh = generate_tube_mesh(&points, &params).unwrap();

        assert_eq!(mesh.vertex_count(), 30);
        assert_eq!(mesh.face_count(), 48);
        assert_eq!(mesh.bone_count(), 6);

        for face in &mesh.faces {
            for &index in face {
                assert!((index as usize) < mesh.vertex_count());
            }
        }

        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn minimal_tube_is_closed() {
        let points = straight_chain(1.0, 5.0);
        assert_eq!(points.len(), 2);

        let params = TubeParams::default().with_resolution(8);
        let mesh = generate_tube_mesh(&points, &params).unwrap();

        // Two caps plus one wall segment
        assert_eq!(mesh.face_count(), 4 * 8);
        assert_eq!(mesh.vertex_count(), 2 * 9);
    }

    #[test]
    fn winding_is_outward() {
        let points = straight_chain(10.0, 2.0);
        let params = TubeParams::default().with_resolution(16).with_radius(0.5);
        let mesh = generate_tube_mesh(&points, &params).unwrap();

        let volume = signed_volume(&mesh);
        assert!(volume > 0.0, "tube is inside out (volume {volume})");

        // A 16-gon prism slightly undercuts the true cylinder volume
        let cylinder = std::f64::consts::PI * 0.5 * 0.5 * 10.0;
        assert!((volume - cylinder).abs() / cylinder < 0.05);
    }

    #[test]
    fn normals_point_away_from_the_axis() {
        let points = straight_chain(10.0, 2.0);
        let params = TubeParams::default().with_resolution(12);
        let mesh = generate_tube_mesh(&points, &params).unwrap();

        // Interior ring perimeter vertices: normal ≈ radial direction
        let ring_size = 13;
        for ring_index in 1..5 {
            for i in 0..12 {
                let vertex = ring_size * ring_index + 1 + i;
                let position = mesh.vertices[vertex];
                let radial = Vector3::new(0.0, position.y, position.z).normalize();
                let normal = mesh.normals[vertex];

                assert!(normal.dot(&radial) > 0.9);
            }
        }
    }

    #[test]
    fn uvs_mirror_vertex_xy() {
        let points = straight_chain(4.0, 2.0);
        let mesh = generate_tube_mesh(&points, &TubeParams::default()).unwrap();

        assert_eq!(mesh.uvs.len(), mesh.vertex_count());
        for (vertex, uv) in mesh.vertices.iter().zip(&mesh.uvs) {
            assert_relative_eq!(uv.x, vertex.x, epsilon = 1e-12);
            assert_relative_eq!(uv.y, vertex.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn skinning_buffers_are_complete() {
        let points = straight_chain(6.0, 2.0);
        let mesh = generate_tube_mesh(&points, &TubeParams::default()).unwrap();

        assert_eq!(mesh.bone_weights.len(), mesh.vertex_count());
        assert_eq!(mesh.bind_poses.len(), points.len());

        let ring_size = TubeParams::default().resolution + 1;
        for (vertex, weight) in mesh.bone_weights.iter().enumerate() {
            assert_eq!(weight.bone_index, vertex / ring_size);
            assert!((weight.weight - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn bind_poses_map_ring_centers_to_origin() {
        let points = straight_chain(8.0, 2.0);
        let mesh = generate_tube_mesh(&points, &TubeParams::default()).unwrap();

        let ring_size = TubeParams::default().resolution + 1;
        for (bone, pose) in mesh.bind_poses.iter().enumerate() {
            let center = mesh.vertices[bone * ring_size];
            let local = pose.transform_point(&center);
            assert_relative_eq!(local.coords.norm(), 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let points = straight_chain(10.0, 3.0);
        let params = TubeParams::default().with_resolution(7).with_radius(0.3);

        let first = generate_tube_mesh(&points, &params).unwrap();
        let second = generate_tube_mesh(&points, &params).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn rejects_single_point() {
        let frame = rope_types::Frame::from_forward(Vector3::x());
        let points = vec![SkeletonPoint::new(Point3::origin(), frame)];

        let result = generate_tube_mesh(&points, &TubeParams::default());
        assert!(result.unwrap_err().is_insufficient_points());
    }

    #[test]
    fn rejects_empty_chain() {
        let result = generate_tube_mesh(&[], &TubeParams::default());
        assert!(matches!(
            result,
            Err(MeshError::InsufficientPoints { actual: 0, .. })
        ));
    }

    #[test]
    fn rejects_degenerate_resolution() {
        let points = straight_chain(4.0, 2.0);
        let params = TubeParams::default().with_resolution(1);

        assert!(matches!(
            generate_tube_mesh(&points, &params),
            Err(MeshError::ResolutionOutOfRange { actual: 1, .. })
        ));
    }

    #[test]
    fn rejects_non_positive_radius() {
        let points = straight_chain(4.0, 2.0);

        for radius in [0.0, -1.0, f64::NAN] {
            let params = TubeParams::default().with_radius(radius);
            assert!(matches!(
                generate_tube_mesh(&points, &params),
                Err(MeshError::InvalidRadius(_))
            ));
        }
    }

    #[test]
    fn resolution_above_soft_limit_still_generates() {
        let points = straight_chain(4.0, 2.0);
        let params = TubeParams::default().with_resolution(SOFT_RESOLUTION_LIMIT + 5);

        let mesh = generate_tube_mesh(&points, &params).unwrap();
        assert_eq!(mesh.face_count(), triangle_count(30, points.len()));
    }
}
