//! Core data types for procedural rope generation.
//!
//! This crate provides the foundational types shared by the rope crates:
//!
//! - [`Frame`] - Orientation basis carried by each skeleton point
//! - [`SkeletonPoint`] - A sampled position with its orientation
//! - [`RopeMesh`] - The generated skinned tube mesh buffers
//! - [`BoneWeight`] - Per-vertex rigid bone binding
//! - [`RopeConfig`] - Host-facing rope configuration
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system** with `f64` coordinates
//! throughout. Face winding is **counter-clockwise (CCW) when viewed from
//! outside**; normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use rope_types::{RopeMesh, BoneWeight};
//! use nalgebra::Point3;
//!
//! let mut mesh = RopeMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(0.5, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod config;
mod error;
mod frame;
mod mesh;
mod skeleton;

pub use config::{CollisionMode, ConfigError, RopeConfig, NODE_SPACING_FACTOR};
pub use error::MeshDataError;
pub use frame::Frame;
pub use mesh::{BoneWeight, RopeMesh};
pub use skeleton::SkeletonPoint;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix4, Point3, Vector2, Vector3};
