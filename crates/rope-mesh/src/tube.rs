//! Triangulation of the tube surface.
//!
//! Two kinds of faces close the tube: quad walls between each pair of
//! adjacent rings (two triangles per quad) and a triangle fan capping each
//! end. All windings are counter-clockwise viewed from outside the tube.

use crate::ring::Ring;

/// Which end of the tube a cap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapEnd {
    /// The first ring; the cap faces against the rope direction.
    Start,
    /// The last ring; the cap faces along the rope direction.
    End,
}

/// Exact number of triangles in a tube over `ring_count` rings.
///
/// `resolution` triangles per cap on each end, plus `2 * resolution` wall
/// triangles per ring-to-ring segment:
/// `2*resolution + 2*resolution*(ring_count - 1) = 2*resolution*ring_count`.
///
/// # Example
///
/// ```
/// use rope_mesh::triangle_count;
///
/// // Minimal tube: two caps and one wall segment
/// assert_eq!(triangle_count(8, 2), 32);
/// assert_eq!(triangle_count(4, 6), 48);
/// ```
#[must_use]
pub const fn triangle_count(resolution: usize, ring_count: usize) -> usize {
    2 * resolution * ring_count
}

/// Emit the triangle fan closing one end of the tube.
///
/// One triangle per perimeter edge, fanning out from the ring's center
/// vertex. The winding flips between the two ends so both caps face away
/// from the tube interior.
pub fn cap_triangles(ring: Ring, end: CapEnd, faces: &mut Vec<[u32; 3]>) {
    for i in 0..ring.resolution() {
        let current = ring.perimeter(i);
        let next = ring.perimeter(i + 1);

        match end {
            CapEnd::Start => faces.push([ring.center(), current, next]),
            CapEnd::End => faces.push([ring.center(), next, current]),
        }
    }
}

/// Emit the wall triangles joining two adjacent rings.
///
/// For each perimeter index the quad between the rings splits into two
/// triangles, wrapping at the seam. `near` is the ring closer to the rope
/// start; the winding keeps normals pointing out of the tube.
pub fn wall_triangles(near: Ring, far: Ring, faces: &mut Vec<[u32; 3]>) {
    debug_assert_eq!(near.resolution(), far.resolution());

    for i in 0..near.resolution() {
        let near_current = near.perimeter(i);
        let near_next = near.perimeter(i + 1);
        let far_current = far.perimeter(i);
        let far_next = far.perimeter(i + 1);

        faces.push([near_current, far_current, near_next]);
        faces.push([near_next, far_current, far_next]);
    }
}
