//! Buffer-integrity errors for rope mesh data.

use thiserror::Error;

/// Violations of the parallel-buffer invariants of a [`RopeMesh`].
///
/// Reported by [`RopeMesh::validate`]; a mesh produced by the generator
/// never violates these, the check exists for data that crossed a
/// serialization or FFI boundary.
///
/// [`RopeMesh`]: crate::RopeMesh
/// [`RopeMesh::validate`]: crate::RopeMesh::validate
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshDataError {
    /// A parallel buffer disagrees with the vertex buffer length.
    #[error("buffer `{buffer}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Name of the offending buffer.
        buffer: &'static str,
        /// Expected entry count.
        expected: usize,
        /// Actual entry count.
        actual: usize,
    },

    /// A face references a vertex index outside the vertex buffer.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    FaceIndexOutOfBounds {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// A vertex is bound to a bone with no bind pose.
    #[error("vertex {vertex} is bound to bone {bone_index}, but only {bone_count} bind poses exist")]
    BoneIndexOutOfBounds {
        /// Index of the offending vertex.
        vertex: usize,
        /// The out-of-range bone index.
        bone_index: usize,
        /// Number of bind poses in the mesh.
        bone_count: usize,
    },

    /// A vertex weight deviates from the rigid binding contract.
    #[error("vertex {vertex} has weight {weight}, expected exactly 1.0")]
    NonRigidWeight {
        /// Index of the offending vertex.
        vertex: usize,
        /// The offending weight.
        weight: f64,
    },
}
