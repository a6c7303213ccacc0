//! Cross-section rings and their vertex layout.

use nalgebra::Point3;
use rope_types::SkeletonPoint;

/// One cross-section ring's slot in the global vertex buffer.
///
/// The center vertex is written first, at `start`; the perimeter vertices
/// follow at `start + 1 ..= start + resolution`. Triangulation and UV
/// assignment rely on this layout, so it is fixed for the whole mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    start: u32,
    resolution: u32,
}

impl Ring {
    /// Create a ring record starting at the given vertex offset.
    #[must_use]
    pub const fn new(start: u32, resolution: u32) -> Self {
        Self { start, resolution }
    }

    /// Number of perimeter vertices.
    #[must_use]
    pub const fn resolution(&self) -> u32 {
        self.resolution
    }

    /// Total vertices occupied by the ring, perimeter plus center.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.resolution + 1
    }

    /// Vertex-buffer index of the center vertex.
    #[must_use]
    pub const fn center(&self) -> u32 {
        self.start
    }

    /// Vertex-buffer index of perimeter vertex `i`, wrapping at the seam.
    #[must_use]
    pub const fn perimeter(&self, i: u32) -> u32 {
        self.start + 1 + (i % self.resolution)
    }
}

/// Append one cross-section ring to the vertex buffer.
///
/// Writes the center vertex at the skeleton point's position, then
/// `resolution` perimeter vertices at
/// `center + radius * (cos θᵢ * cross + sin θᵢ * up)` with
/// `θᵢ = 2π * i / resolution`, which is the point's radial `cross` arm
/// rotated about its `forward` axis in equal angular steps.
///
/// Returns the [`Ring`] record for the appended vertices.
///
/// # Example
///
/// ```
/// use rope_mesh::build_ring;
/// use rope_types::{Frame, SkeletonPoint};
/// use nalgebra::{Point3, Vector3};
///
/// let point = SkeletonPoint::new(Point3::origin(), Frame::from_forward(Vector3::x()));
/// let mut vertices = Vec::new();
///
/// let ring = build_ring(&point, 1.0, 4, &mut vertices);
///
/// assert_eq!(vertices.len(), 5);
/// assert_eq!(ring.center(), 0);
/// assert_eq!(ring.perimeter(4), ring.perimeter(0));
/// ```
#[allow(clippy::cast_possible_truncation)]
// Vertex indices are u32; meshes beyond 4B vertices are unsupported by design
pub fn build_ring(
    point: &SkeletonPoint,
    radius: f64,
    resolution: u32,
    vertices: &mut Vec<Point3<f64>>,
) -> Ring {
    let ring = Ring::new(vertices.len() as u32, resolution);
    let center = point.position;
    let frame = &point.frame;

    vertices.push(center);

    for i in 0..resolution {
        let angle = std::f64::consts::TAU * f64::from(i) / f64::from(resolution);
        let (sin_a, cos_a) = angle.sin_cos();

        let offset = (frame.cross * cos_a + frame.up * sin_a) * radius;
        vertices.push(center + offset);
    }

    ring
}
