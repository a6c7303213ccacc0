//! The generated rope mesh and its skinning data.

use nalgebra::{Matrix4, Point3, Vector2, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::MeshDataError;

/// Tolerance for the rigid weight check in [`RopeMesh::validate`].
const WEIGHT_EPS: f64 = 1e-9;

/// A single bone influence on a vertex.
///
/// Rope vertices are rigidly bound: every vertex carries exactly one
/// influence with weight 1.0, the ring it belongs to. No blending happens
/// between adjacent rings, so each tube segment deforms as a rigid piece.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoneWeight {
    /// Index of the influencing bone (skeleton point).
    pub bone_index: usize,
    /// Weight of the influence.
    pub weight: f64,
}

impl BoneWeight {
    /// Create a bone weight.
    #[must_use]
    pub const fn new(bone_index: usize, weight: f64) -> Self {
        Self { bone_index, weight }
    }

    /// Create a rigid (weight 1.0) binding to the given bone.
    #[must_use]
    pub const fn rigid(bone_index: usize) -> Self {
        Self::new(bone_index, 1.0)
    }
}

/// A skinned tube mesh around a rope skeleton.
///
/// Stores the render buffers as parallel arrays: one position, normal, UV
/// coordinate and bone weight per vertex, plus one bind pose per skeleton
/// point. All buffers are filled in a single build pass and never mutated
/// afterward; deformation happens in the host engine through the bones.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside.
/// Normals point outward by the right-hand rule.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RopeMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Triangle faces as indices into the vertex buffer.
    pub faces: Vec<[u32; 3]>,

    /// Per-vertex unit normals, derived from the face list.
    pub normals: Vec<Vector3<f64>>,

    /// Per-vertex texture coordinates.
    pub uvs: Vec<Vector2<f64>>,

    /// One bind pose per skeleton point: the inverse of the point's world
    /// placement at build time, as a homogeneous matrix.
    pub bind_poses: Vec<Matrix4<f64>>,

    /// One rigid bone binding per vertex.
    pub bone_weights: Vec<BoneWeight>,
}

impl RopeMesh {
    /// Create an empty mesh.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            normals: Vec::new(),
            uvs: Vec::new(),
            bind_poses: Vec::new(),
            bone_weights: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated buffer capacity.
    ///
    /// The generator computes exact sizes up front so the fill passes never
    /// reallocate.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize, bone_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            normals: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            bind_poses: Vec::with_capacity(bone_count),
            bone_weights: Vec::with_capacity(vertex_count),
        }
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of bones (skeleton points).
    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bind_poses.len()
    }

    /// Check whether the mesh has no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Recompute per-vertex normals from the current face list.
    ///
    /// Each face contributes its unnormalized cross product to its three
    /// corners, so larger faces weigh more (area-weighted average), then
    /// every accumulated normal is normalized. Normals are always derived
    /// this way rather than authored, which keeps them consistent with
    /// whatever deformation the host renderer applies later.
    ///
    /// Any existing normal data is discarded.
    pub fn recompute_normals(&mut self) {
        self.normals.clear();
        self.normals.resize(self.vertices.len(), Vector3::zeros());

        for &[i0, i1, i2] in &self.faces {
            let v0 = self.vertices[i0 as usize];
            let v1 = self.vertices[i1 as usize];
            let v2 = self.vertices[i2 as usize];

            // Unnormalized: length is proportional to face area
            let face_normal = (v1 - v0).cross(&(v2 - v0));

            self.normals[i0 as usize] += face_normal;
            self.normals[i1 as usize] += face_normal;
            self.normals[i2 as usize] += face_normal;
        }

        for normal in &mut self.normals {
            *normal = normal
                .try_normalize(f64::EPSILON)
                .unwrap_or_else(Vector3::zeros);
        }
    }

    /// Check the parallel-buffer invariants.
    ///
    /// Verifies that every per-vertex buffer matches the vertex buffer
    /// length, every face index is in range, every bone binding points at
    /// an existing bind pose, and every weight is the rigid 1.0.
    ///
    /// # Errors
    ///
    /// Returns the first [`MeshDataError`] encountered.
    pub fn validate(&self) -> Result<(), MeshDataError> {
        let vertex_count = self.vertex_count();

        for (buffer, actual) in [
            ("normals", self.normals.len()),
            ("uvs", self.uvs.len()),
            ("bone_weights", self.bone_weights.len()),
        ] {
            if actual != vertex_count {
                return Err(MeshDataError::LengthMismatch {
                    buffer,
                    expected: vertex_count,
                    actual,
                });
            }
        }

        for (face, indices) in self.faces.iter().enumerate() {
            for &index in indices {
                if index as usize >= vertex_count {
                    return Err(MeshDataError::FaceIndexOutOfBounds {
                        face,
                        index,
                        vertex_count,
                    });
                }
            }
        }

        let bone_count = self.bone_count();
        for (vertex, weight) in self.bone_weights.iter().enumerate() {
            if weight.bone_index >= bone_count {
                return Err(MeshDataError::BoneIndexOutOfBounds {
                    vertex,
                    bone_index: weight.bone_index,
                    bone_count,
                });
            }
            if (weight.weight - 1.0).abs() > WEIGHT_EPS {
                return Err(MeshDataError::NonRigidWeight {
                    vertex,
                    weight: weight.weight,
                });
            }
        }

        Ok(())
    }
}
