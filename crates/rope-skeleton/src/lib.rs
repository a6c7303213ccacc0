//! Fixed-spacing skeleton sampling for procedural ropes.
//!
//! A rope skeleton is an ordered chain of points between two endpoints.
//! This crate produces that chain in two steps:
//!
//! - [`sample_segment`] walks from `start` toward `end` at a fixed spacing
//!   and always lands exactly on `end`
//! - [`skeleton_points`] assigns each sampled position an orientation
//!   [`Frame`](rope_types::Frame) for ring construction
//!
//! # Quick Start
//!
//! ```
//! use rope_skeleton::{sample_segment, skeleton_points};
//! use nalgebra::Point3;
//!
//! let positions = sample_segment(
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(10.0, 0.0, 0.0),
//!     2.0,
//! ).unwrap();
//!
//! assert_eq!(positions.len(), 6);
//!
//! let points = skeleton_points(&positions).unwrap();
//! assert_eq!(points.len(), positions.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod frames;
mod sample;

pub use error::{SkeletonError, SkeletonResult};
pub use frames::skeleton_points;
pub use sample::sample_segment;
