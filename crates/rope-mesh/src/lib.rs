//! Skinned tube mesh generation around a rope skeleton.
//!
//! Wraps a chain of oriented skeleton points in a closed tube: one circular
//! cross-section ring per point, quad walls between adjacent rings, a
//! triangle-fan cap on each end, and skinning data (bind poses plus rigid
//! per-vertex bone weights) so the tube deforms with the skeleton.
//!
//! # Quick Start
//!
//! ```
//! use rope_mesh::{generate_tube_mesh, TubeParams};
//! use rope_skeleton::{sample_segment, skeleton_points};
//! use nalgebra::Point3;
//!
//! let positions = sample_segment(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     2.0,
//! ).unwrap();
//! let points = skeleton_points(&positions).unwrap();
//!
//! let params = TubeParams::default().with_resolution(8).with_radius(0.5);
//! let mesh = generate_tube_mesh(&points, &params).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), points.len() * 9);
//! assert!(mesh.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod generate;
mod ring;
mod skin;
mod tube;

pub use error::{MeshError, MeshResult};
pub use generate::{generate_tube_mesh, TubeParams, SOFT_RESOLUTION_LIMIT};
pub use ring::{build_ring, Ring};
pub use skin::{bind_poses, bone_weights};
pub use tube::{cap_triangles, triangle_count, wall_triangles, CapEnd};
