//! Scene configuration
//!
//! A scene is fully described by a small JSON document: the collider layout,
//! where the camera rectangle starts, physics tuning and the drift tolerance.
//! Hosts can ship their own layout; the built-in ones match the demo scenes.

use serde::{Deserialize, Serialize};

use crate::core::geometry::Rect;

use super::error::ConfigError;

/// Upper bound on collider count (pool capacity is fixed per scene)
pub const MAX_COLLIDERS: usize = 16;

/// Physics bookkeeping may trail the pool by this many bodies
pub const DEFAULT_SYNC_TOLERANCE: usize = 2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity_x: f32,
    pub gravity_y: f32,
    /// Seconds per physics step
    pub fixed_dt: f32,
    /// Mass per unit area
    pub density: f32,
    /// Per-axis speed cap (units per second)
    pub max_speed: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity_x: 0.0,
            gravity_y: 9.81,
            fixed_dt: 1.0 / 60.0,
            density: 12.0,
            max_speed: 600.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub regions: Vec<Rect>,
    /// Camera rectangle before the first pointer update
    pub query: Rect,
    pub physics: PhysicsConfig,
    pub sync_tolerance: usize,
}

impl Default for SceneConfig {
    /// Four 100x100 colliders in an overlapping row at y=350.
    fn default() -> Self {
        Self {
            regions: [101.0, 151.0, 201.0, 251.0]
                .iter()
                .map(|&x| Rect::new(x, 350.0, 100.0, 100.0))
                .collect(),
            query: Rect::new(10.0, 10.0, 200.0, 200.0),
            physics: PhysicsConfig::default(),
            sync_tolerance: DEFAULT_SYNC_TOLERANCE,
        }
    }
}

impl SceneConfig {
    /// Five 100x100 colliders spaced 120 apart at y=200.
    pub fn five_lane() -> Self {
        Self {
            regions: (1..=5)
                .map(|k| Rect::new(10.0 + 120.0 * k as f32, 200.0, 100.0, 100.0))
                .collect(),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.regions.is_empty() {
            return Err(ConfigError::NoRegions);
        }
        if self.regions.len() > MAX_COLLIDERS {
            return Err(ConfigError::TooManyRegions {
                count: self.regions.len(),
                max: MAX_COLLIDERS,
            });
        }
        if let Some(index) = self.regions.iter().position(|r| !r.is_valid()) {
            return Err(ConfigError::InvalidRegion { index });
        }
        if !self.query.is_valid() {
            return Err(ConfigError::InvalidQuery);
        }

        let p = &self.physics;
        if !(p.fixed_dt.is_finite() && p.fixed_dt > 0.0) {
            return Err(ConfigError::InvalidPhysics("fixed_dt must be positive"));
        }
        if !(p.density.is_finite() && p.density > 0.0) {
            return Err(ConfigError::InvalidPhysics("density must be positive"));
        }
        if !(p.max_speed.is_finite() && p.max_speed >= 0.0) {
            return Err(ConfigError::InvalidPhysics("max_speed must be non-negative"));
        }
        if !(p.gravity_x.is_finite() && p.gravity_y.is_finite()) {
            return Err(ConfigError::InvalidPhysics("gravity must be finite"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_four_colliders_at_y_350() {
        let config = SceneConfig::default();
        assert_eq!(config.regions.len(), 4);
        let xs: Vec<f32> = config.regions.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![101.0, 151.0, 201.0, 251.0]);
        assert!(config.regions.iter().all(|r| r.y == 350.0 && r.width == 100.0));
        assert_eq!(config.query, Rect::new(10.0, 10.0, 200.0, 200.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn five_lane_layout_matches_spacing() {
        let config = SceneConfig::five_lane();
        assert_eq!(config.regions.len(), 5);
        assert_eq!(config.regions[0].x, 130.0);
        assert_eq!(config.regions[4].x, 610.0);
        assert!(config.regions.iter().all(|r| r.y == 200.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{ "regions": [ { "x": 0, "y": 0, "width": 10, "height": 10 } ] }"#;
        let config = SceneConfig::from_json(json).expect("partial config should parse");
        assert_eq!(config.regions.len(), 1);
        assert_eq!(config.sync_tolerance, DEFAULT_SYNC_TOLERANCE);
        assert_eq!(config.physics, PhysicsConfig::default());
    }

    #[test]
    fn json_round_trip_preserves_layout() {
        let config = SceneConfig::five_lane();
        let json = config.to_json().expect("serialize");
        assert_eq!(SceneConfig::from_json(&json).expect("parse"), config);
    }

    #[test]
    fn rejects_empty_and_oversized_layouts() {
        let empty = SceneConfig { regions: Vec::new(), ..SceneConfig::default() };
        assert!(matches!(empty.validate(), Err(ConfigError::NoRegions)));

        let big = SceneConfig {
            regions: vec![Rect::new(0.0, 0.0, 1.0, 1.0); MAX_COLLIDERS + 1],
            ..SceneConfig::default()
        };
        assert!(matches!(big.validate(), Err(ConfigError::TooManyRegions { .. })));
    }

    #[test]
    fn rejects_negative_region_size() {
        let json = r#"{ "regions": [ { "x": 0, "y": 0, "width": -5, "height": 10 } ] }"#;
        assert!(matches!(
            SceneConfig::from_json(json),
            Err(ConfigError::InvalidRegion { index: 0 })
        ));
    }

    #[test]
    fn rejects_zero_timestep() {
        let mut config = SceneConfig::default();
        config.physics.fixed_dt = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidPhysics(_))));
    }

    #[test]
    fn malformed_json_is_a_serde_error() {
        assert!(matches!(SceneConfig::from_json("{ nope"), Err(ConfigError::Serde(_))));
    }
}
