//! Visualization configuration
//!
//! Defaults reproduce the stock scene. On the web a page may override any
//! field through a JSON `<script id="viz-config">` block.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{MAX_GRID_RANGE, MAX_TRAJECTORY_POINTS};
use crate::sim::{Obstacle, Pose};

/// Errors raised while reading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("trajectory must have at least one point")]
    EmptyTrajectory,
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("grid range must not be negative, got {0}")]
    NegativeGridRange(i32),
    #[error("grid range {range} exceeds the limit of {max}")]
    GridRangeTooLarge { range: i32, max: i32 },
    #[error("trajectory has {points} points, the limit is {max}")]
    TooManyPoints { points: usize, max: usize },
}

/// Canvas geometry and marker sizes (pixels unless noted)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    /// Pixels per world meter
    pub scale: f64,
    pub robot_size: f64,
    pub direction_length: f64,
    pub obstacle_size: f64,
    /// Grid lines are drawn for whole meters in [-grid_range, grid_range]
    pub grid_range: i32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            scale: 100.0,
            robot_size: 15.0,
            direction_length: 25.0,
            obstacle_size: 10.0,
            grid_range: 4,
        }
    }
}

/// CSS color strings for each scene layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub robot: String,
    pub heading: String,
    pub trajectory: String,
    pub obstacle: String,
    pub grid: String,
    pub axes: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            robot: "#4CAF50".to_string(),
            heading: "#000".to_string(),
            trajectory: "#2196F3".to_string(),
            obstacle: "#F44336".to_string(),
            grid: "#ddd".to_string(),
            axes: "#000".to_string(),
        }
    }
}

/// Reference circle the robot chases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// Circle radius in meters
    pub radius: f64,
    pub points: usize,
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            points: 50,
        }
    }
}

/// Complete scene configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    pub canvas: CanvasConfig,
    pub colors: Colors,
    pub initial_pose: Pose,
    pub trajectory: TrajectoryConfig,
    pub obstacles: Vec<Obstacle>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            colors: Colors::default(),
            initial_pose: Pose::new(0.0, -2.0, 0.0),
            trajectory: TrajectoryConfig::default(),
            obstacles: vec![
                Obstacle::new(-1.0, -1.0),
                Obstacle::new(1.0, 1.0),
                Obstacle::new(0.0, 2.0),
            ],
        }
    }
}

impl VizConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trajectory.points == 0 {
            return Err(ConfigError::EmptyTrajectory);
        }
        if self.trajectory.points > MAX_TRAJECTORY_POINTS {
            return Err(ConfigError::TooManyPoints {
                points: self.trajectory.points,
                max: MAX_TRAJECTORY_POINTS,
            });
        }
        let positive = [
            ("canvas.width", self.canvas.width as f64),
            ("canvas.height", self.canvas.height as f64),
            ("canvas.scale", self.canvas.scale),
            ("trajectory.radius", self.trajectory.radius),
        ];
        for (field, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        let non_negative = [
            ("canvas.robot_size", self.canvas.robot_size),
            ("canvas.direction_length", self.canvas.direction_length),
            ("canvas.obstacle_size", self.canvas.obstacle_size),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.canvas.grid_range < 0 {
            return Err(ConfigError::NegativeGridRange(self.canvas.grid_range));
        }
        if self.canvas.grid_range > MAX_GRID_RANGE {
            return Err(ConfigError::GridRangeTooLarge {
                range: self.canvas.grid_range,
                max: MAX_GRID_RANGE,
            });
        }
        Ok(())
    }

    /// Load config from the page's `<script id="viz-config">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let text = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(crate::consts::CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = text {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded config from page");
                    return config;
                }
                Err(e) => log::warn!("Ignoring page config: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = VizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.scale, 100.0);
        assert_eq!(config.trajectory.points, 50);
        assert_eq!(config.obstacles.len(), 3);
        assert_eq!(config.initial_pose, Pose::new(0.0, -2.0, 0.0));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config = VizConfig::from_json(r#"{"canvas": {"scale": 50.0}, "obstacles": []}"#)
            .expect("partial config should parse");
        assert_eq!(config.canvas.scale, 50.0);
        assert_eq!(config.canvas.width, 800);
        assert!(config.obstacles.is_empty());
        assert_eq!(config.trajectory, TrajectoryConfig::default());
    }

    #[test]
    fn test_rejects_empty_trajectory() {
        let err = VizConfig::from_json(r#"{"trajectory": {"points": 0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTrajectory));
    }

    #[test]
    fn test_rejects_non_positive_scale() {
        let err = VizConfig::from_json(r#"{"canvas": {"scale": 0.0}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::NonPositive {
                field: "canvas.scale",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_grid_range() {
        let err = VizConfig::from_json(r#"{"canvas": {"grid_range": -1}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::NegativeGridRange(-1)));
    }

    #[test]
    fn test_rejects_huge_point_count() {
        let err = VizConfig::from_json(r#"{"trajectory": {"points": 18446744073709551615}}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TooManyPoints {
                points: usize::MAX,
                max: MAX_TRAJECTORY_POINTS
            }
        ));
    }

    #[test]
    fn test_accepts_point_count_at_limit() {
        let mut config = VizConfig::default();
        config.trajectory.points = MAX_TRAJECTORY_POINTS;
        assert!(config.validate().is_ok());
        config.trajectory.points += 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyPoints { .. })
        ));
    }

    #[test]
    fn test_rejects_huge_grid_range() {
        let err = VizConfig::from_json(r#"{"canvas": {"grid_range": 2000000000}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::GridRangeTooLarge {
                range: 2_000_000_000,
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_robot_size() {
        let err = VizConfig::from_json(r#"{"canvas": {"robot_size": -5}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "canvas.robot_size",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_obstacle_size() {
        let err = VizConfig::from_json(r#"{"canvas": {"obstacle_size": -1}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "canvas.obstacle_size",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_negative_direction_length() {
        let err = VizConfig::from_json(r#"{"canvas": {"direction_length": -25}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Negative {
                field: "canvas.direction_length",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_marker_sizes_allowed() {
        let config = VizConfig::from_json(
            r#"{"canvas": {"robot_size": 0, "obstacle_size": 0, "direction_length": 0}}"#,
        );
        assert!(config.is_ok());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = VizConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
