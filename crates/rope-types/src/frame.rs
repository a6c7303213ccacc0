//! Orientation frames for rope cross-sections.

use nalgebra::{UnitQuaternion, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An orientation basis at a point along a rope.
///
/// Consists of three orthonormal vectors: `forward` points along the rope,
/// `up` spans the ring plane together with `cross = forward × up`. Perimeter
/// vertices of a cross-section ring are laid out in the `cross`/`up` plane.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Frame {
    /// Direction of travel along the rope.
    pub forward: Vector3<f64>,
    /// Ring-plane up direction, perpendicular to `forward`.
    pub up: Vector3<f64>,
    /// In-plane radial reference, `forward × up`.
    pub cross: Vector3<f64>,
}

impl Frame {
    /// Create a frame from its three basis vectors.
    ///
    /// Vectors are assumed to be orthonormal with `cross = forward × up`.
    #[must_use]
    pub fn new(forward: Vector3<f64>, up: Vector3<f64>, cross: Vector3<f64>) -> Self {
        Self { forward, up, cross }
    }

    /// Build a frame from a forward direction, look-rotation style.
    ///
    /// The world up axis is rotated into the plane perpendicular to
    /// `forward`, which reproduces how a look-at rotation orients its up
    /// vector. When `forward` is nearly vertical the world X axis is used
    /// as the up hint instead.
    ///
    /// # Example
    ///
    /// ```
    /// use rope_types::Frame;
    /// use nalgebra::Vector3;
    ///
    /// let frame = Frame::from_forward(Vector3::x());
    /// assert!((frame.up - Vector3::y()).norm() < 1e-10);
    /// assert!((frame.cross - Vector3::z()).norm() < 1e-10);
    /// ```
    #[must_use]
    pub fn from_forward(forward: Vector3<f64>) -> Self {
        let forward = forward.try_normalize(f64::EPSILON).unwrap_or(Vector3::z());

        let hint = if forward.y.abs() > 0.999 {
            Vector3::x()
        } else {
            Vector3::y()
        };

        let rotation = UnitQuaternion::face_towards(&forward, &hint);
        let up = rotation * Vector3::y();
        let cross = forward.cross(&up);

        Self { forward, up, cross }
    }

    /// Rotate the ring plane by an angle (radians) around `forward`.
    #[must_use]
    pub fn rotate_around_forward(&self, angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();

        let up = self.up * cos_a + self.cross * sin_a;
        let cross = self.cross * cos_a - self.up * sin_a;

        Self {
            forward: self.forward,
            up,
            cross,
        }
    }

    /// The rotation that carries the local axes onto this frame.
    ///
    /// Local Z maps to `forward` and local Y to `up`.
    #[must_use]
    pub fn rotation(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::face_towards(&self.forward, &self.up)
    }
}
