//! Canvas 2D rendering module
//!
//! Renderers are stateless functions over a [`Surface`], the handful of
//! path/fill/stroke primitives a `CanvasRenderingContext2d` offers. The
//! browser implementation lives in `canvas`; `recording` captures the
//! command stream for tests and the native demo.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod grid;
pub mod recording;
pub mod robot;
pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, Paint, PaintKind, RecordingSurface};
pub use scene::Scene;

/// 2D drawing context in canvas pixel space
pub trait Surface {
    /// Clear the rectangle `(0, 0, width, height)`
    fn clear(&mut self, width: f64, height: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn stroke(&mut self);
    fn set_fill_style(&mut self, color: &str);
    fn set_stroke_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);
}
