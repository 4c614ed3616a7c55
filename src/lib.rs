//! Robot Trajectory Viz - a simulated robot chasing a circular path on a canvas
//!
//! Core modules:
//! - `sim`: Pose/trajectory types and the frame-driven simulation controller
//! - `transform`: World meters to canvas pixels
//! - `renderer`: Drawing surface seam plus grid/robot/scene draw routines
//! - `platform`: Frame scheduling (requestAnimationFrame on web, manual pump on native)
//! - `config`: Canvas/color/scenario configuration
//! - `app`: Top-level wiring of the above

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod transform;

pub use app::Visualization;
pub use config::{ConfigError, VizConfig};
pub use transform::CoordinateTransformer;

use glam::DVec2;

/// Visualization constants
pub mod consts {
    /// Fraction of the remaining distance covered per tick
    pub const APPROACH_GAIN: f64 = 0.1;
    /// Spacing between grid lines in world meters
    pub const GRID_SPACING: f64 = 1.0;
    /// Largest accepted `grid_range` (lines per half-axis)
    pub const MAX_GRID_RANGE: i32 = 1_000;
    /// Largest accepted trajectory sample count
    pub const MAX_TRAJECTORY_POINTS: usize = 10_000;

    /// DOM element ids
    pub const CANVAS_ID: &str = "robotCanvas";
    pub const START_BUTTON_ID: &str = "startBtn";
    pub const RESET_BUTTON_ID: &str = "resetBtn";
    pub const CONFIG_ELEMENT_ID: &str = "viz-config";
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> DVec2 {
    DVec2::new(r * theta.cos(), r * theta.sin())
}
