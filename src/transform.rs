//! World meters to canvas pixels
//!
//! The world origin sits at the canvas center and world +y points up, so the
//! vertical axis is flipped relative to canvas space.

use glam::DVec2;

use crate::config::CanvasConfig;

/// Affine map between world space and canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransformer {
    width: f64,
    height: f64,
    center: DVec2,
    /// Pixels per meter
    scale: f64,
}

impl CoordinateTransformer {
    pub fn new(canvas_width: f64, canvas_height: f64, scale: f64) -> Self {
        Self {
            width: canvas_width,
            height: canvas_height,
            center: DVec2::new(canvas_width / 2.0, canvas_height / 2.0),
            scale,
        }
    }

    pub fn from_config(canvas: &CanvasConfig) -> Self {
        Self::new(canvas.width as f64, canvas.height as f64, canvas.scale)
    }

    #[inline]
    pub fn world_to_canvas(&self, world: DVec2) -> DVec2 {
        DVec2::new(
            self.center.x + world.x * self.scale,
            self.center.y - world.y * self.scale, // Flip Y axis
        )
    }

    #[inline]
    pub fn canvas_to_world(&self, canvas: DVec2) -> DVec2 {
        DVec2::new(
            (canvas.x - self.center.x) / self.scale,
            (self.center.y - canvas.y) / self.scale,
        )
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}
