//! Robot pose and static scene entities

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Current phase of the simulation loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimPhase {
    /// No tick is scheduled
    #[default]
    Idle,
    /// A tick loop is active
    Running,
}

/// Robot pose in world space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    /// Meters
    pub x: f64,
    /// Meters
    pub y: f64,
    /// Heading in radians, counter-clockwise from +x
    pub theta: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self { x, y, theta }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Move a fraction of the way toward `target` and face along the motion
    pub fn approach(&mut self, target: DVec2, gain: f64) {
        let delta = target - self.position();
        self.x += delta.x * gain;
        self.y += delta.y * gain;
        self.theta = delta.y.atan2(delta.x);
    }
}

/// A sample of the reference trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
}

impl TrajectoryPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for TrajectoryPoint {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// A static obstacle marker (drawn only, never collided with)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f64,
    pub y: f64,
}

impl Obstacle {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}
