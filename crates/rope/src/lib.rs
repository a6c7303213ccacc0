//! Procedural rope generation.
//!
//! This umbrella crate re-exports the rope crates and provides the one-call
//! [`build_rope`] entry point: sample a straight segment into an evenly
//! spaced skeleton, orient every point, and wrap the chain in a skinned
//! tube mesh ready for a host engine to bind bones to.
//!
//! # Quick Start
//!
//! ```
//! use rope::prelude::*;
//! use nalgebra::Point3;
//!
//! let config = RopeConfig::default().with_resolution(8);
//!
//! let mesh = build_rope(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     &config,
//! ).unwrap();
//!
//! assert!(mesh.face_count() > 0);
//! assert_eq!(mesh.bone_weights.len(), mesh.vertex_count());
//! ```
//!
//! # Module Organization
//!
//! - [`types`] - Core data: `Frame`, `SkeletonPoint`, `RopeMesh`,
//!   `BoneWeight`, `RopeConfig`
//! - [`skeleton`] - Fixed-spacing segment sampling and frame assignment
//! - [`mesh`] - Ring construction, tube triangulation, skin binding and
//!   mesh assembly
//!
//! The physics fields of [`RopeConfig`](types::RopeConfig) (spring, damper,
//! drag, collision mode, layer) are carried for the host's physics assembly
//! layer; this crate only reads the geometric ones.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod builder;

pub use builder::{build_rope, RopeError};

/// Core data types: frames, skeleton points, mesh buffers, configuration.
pub use rope_types as types;

/// Skeleton sampling: fixed-spacing segment walk and frame assignment.
pub use rope_skeleton as skeleton;

/// Tube mesh generation: rings, triangulation, skinning, assembly.
pub use rope_mesh as mesh;

/// Commonly used items.
pub mod prelude {
    pub use crate::builder::{build_rope, RopeError};
    pub use rope_mesh::{generate_tube_mesh, TubeParams};
    pub use rope_skeleton::{sample_segment, skeleton_points};
    pub use rope_types::{
        BoneWeight, CollisionMode, Frame, RopeConfig, RopeMesh, SkeletonPoint,
    };
}
