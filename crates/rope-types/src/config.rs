//! Host-facing rope configuration.
//!
//! The geometry core reads only `radius`, `resolution` and the derived
//! node spacing. The remaining fields (drag, spring, damper, collision
//! mode, layer) are carried as inert data for the physics assembly layer
//! that turns skeleton points into simulated bodies.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// On-axis node spacing is `radius * distance_between_nodes * 2`.
pub const NODE_SPACING_FACTOR: f64 = 2.0;

/// How the physics layer should make rope pieces interact with the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CollisionMode {
    /// No collider on rope pieces.
    #[default]
    None,
    /// Solid collider on each piece.
    Collider,
    /// Trigger-only collider on each piece.
    Trigger,
    /// Both a solid collider and a trigger.
    ColliderAndTrigger,
}

/// Configuration for building one rope.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RopeConfig {
    /// Tube radius.
    pub radius: f64,
    /// Perimeter vertices per cross-section ring.
    pub resolution: usize,
    /// Spacing multiplier between skeleton nodes, in radii.
    pub distance_between_nodes: f64,
    /// Linear drag applied to each simulated piece.
    pub drag: f64,
    /// Joint spring strength between pieces.
    pub spring: f64,
    /// Joint spring damping between pieces.
    pub damper: f64,
    /// Collider setup for the simulated pieces.
    pub collision: CollisionMode,
    /// Physics layer the rope object and its pieces are placed on.
    pub layer: u32,
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            resolution: 10,
            distance_between_nodes: 1.0,
            drag: 0.0,
            spring: 100.0,
            damper: 10.0,
            collision: CollisionMode::None,
            layer: 0,
        }
    }
}

impl RopeConfig {
    /// Set the tube radius.
    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Set the ring resolution.
    #[must_use]
    pub fn with_resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Set the node spacing multiplier.
    #[must_use]
    pub fn with_distance_between_nodes(mut self, distance: f64) -> Self {
        self.distance_between_nodes = distance;
        self
    }

    /// Set the collision mode for the physics layer.
    #[must_use]
    pub fn with_collision(mut self, collision: CollisionMode) -> Self {
        self.collision = collision;
        self
    }

    /// Set the joint spring and damper strengths.
    #[must_use]
    pub fn with_spring(mut self, spring: f64, damper: f64) -> Self {
        self.spring = spring;
        self.damper = damper;
        self
    }

    /// Set the physics layer.
    #[must_use]
    pub fn with_layer(mut self, layer: u32) -> Self {
        self.layer = layer;
        self
    }

    /// Distance between consecutive skeleton points.
    ///
    /// # Example
    ///
    /// ```
    /// use rope_types::RopeConfig;
    ///
    /// let config = RopeConfig::default()
    ///     .with_radius(0.5)
    ///     .with_distance_between_nodes(2.0);
    ///
    /// assert!((config.node_spacing() - 2.0).abs() < 1e-10);
    /// ```
    #[must_use]
    pub fn node_spacing(&self) -> f64 {
        self.radius * self.distance_between_nodes * NODE_SPACING_FACTOR
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the radius or node distance is not a
    /// positive finite number, or if the resolution is below 2.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }

        if !self.distance_between_nodes.is_finite() || self.distance_between_nodes <= 0.0 {
            return Err(ConfigError::InvalidNodeDistance(self.distance_between_nodes));
        }

        if self.resolution < 2 {
            return Err(ConfigError::ResolutionTooLow {
                min: 2,
                actual: self.resolution,
            });
        }

        Ok(())
    }
}

/// Errors reported by [`RopeConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Radius is zero, negative or not finite.
    #[error("invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// Node distance is zero, negative or not finite.
    #[error("invalid distance between nodes: {0} (must be positive)")]
    InvalidNodeDistance(f64),

    /// Ring resolution is below the minimum for a closed tube.
    #[error("resolution must be at least {min}, got {actual}")]
    ResolutionTooLow {
        /// Minimum supported resolution.
        min: usize,
        /// Configured resolution.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(RopeConfig::default().validate().is_ok());
    }

    #[test]
    fn node_spacing_uses_fixed_factor() {
        let config = RopeConfig::default()
            .with_radius(1.0)
            .with_distance_between_nodes(1.5);

        assert!((config.node_spacing() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn builders() {
        let config = RopeConfig::default()
            .with_radius(0.25)
            .with_resolution(8)
            .with_collision(CollisionMode::Trigger)
            .with_spring(50.0, 5.0)
            .with_layer(3);

        assert!((config.radius - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.resolution, 8);
        assert_eq!(config.collision, CollisionMode::Trigger);
        assert!((config.spring - 50.0).abs() < f64::EPSILON);
        assert_eq!(config.layer, 3);
    }

    #[test]
    fn rejects_bad_radius() {
        let config = RopeConfig::default().with_radius(0.0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadius(0.0)));

        let config = RopeConfig::default().with_radius(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bad_node_distance() {
        let config = RopeConfig::default().with_distance_between_nodes(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidNodeDistance(_))
        ));
    }

    #[test]
    fn rejects_degenerate_resolution() {
        let config = RopeConfig::default().with_resolution(1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::ResolutionTooLow { min: 2, actual: 1 })
        );
    }
}
