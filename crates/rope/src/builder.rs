//! One-call rope construction.

use nalgebra::Point3;
use thiserror::Error;
use tracing::info;

use rope_mesh::{generate_tube_mesh, MeshError, TubeParams};
use rope_skeleton::{sample_segment, skeleton_points, SkeletonError};
use rope_types::{ConfigError, RopeConfig, RopeMesh};

/// Errors that can occur while building a rope.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RopeError {
    /// The configuration failed validation.
    #[error("invalid rope configuration: {0}")]
    Config(#[from] ConfigError),

    /// Skeleton sampling failed.
    #[error(transparent)]
    Skeleton(#[from] SkeletonError),

    /// Mesh generation failed.
    #[error(transparent)]
    Mesh(#[from] MeshError),
}

/// Build a rope mesh between two endpoints.
///
/// Runs the full data path: validate the configuration, sample the segment
/// at the configured node spacing, orient every skeleton point, and
/// generate the skinned tube. The host's physics layer is expected to turn
/// the same skeleton into simulated bodies and bind the mesh's bones to
/// them; this call produces only the geometry.
///
/// # Errors
///
/// Returns a [`RopeError`] if the configuration is invalid, the endpoints
/// coincide, or mesh generation rejects its input. All checks run before
/// any buffer is allocated.
///
/// # Example
///
/// ```
/// use rope::{build_rope, types::RopeConfig};
/// use nalgebra::Point3;
///
/// let config = RopeConfig::default()
///     .with_radius(0.5)
///     .with_resolution(4)
///     .with_distance_between_nodes(2.0);
///
/// let mesh = build_rope(
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(10.0, 0.0, 0.0),
///     &config,
/// ).unwrap();
///
/// // Six skeleton points at spacing 2, five vertices per ring
/// assert_eq!(mesh.bone_count(), 6);
/// assert_eq!(mesh.vertex_count(), 30);
/// ```
pub fn build_rope(
    start: Point3<f64>,
    end: Point3<f64>,
    config: &RopeConfig,
) -> Result<RopeMesh, RopeError> {
    config.validate()?;

    let positions = sample_segment(start, end, config.node_spacing())?;
    let points = skeleton_points(&positions)?;

    let params = TubeParams::default()
        .with_resolution(config.resolution)
        .with_radius(config.radius);
    let mesh = generate_tube_mesh(&points, &params)?;

    info!(
        bones = mesh.bone_count(),
        vertices = mesh.vertex_count(),
        "rope built"
    );

    Ok(mesh)
}
