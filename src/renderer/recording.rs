//! In-memory [`Surface`] that records every command
//!
//! Used by tests and by the native demo, where there is no canvas.

use glam::DVec2;

use super::Surface;

/// One call made against the surface
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    BeginPath,
    MoveTo(DVec2),
    LineTo(DVec2),
    Arc {
        center: DVec2,
        radius: f64,
        start: f64,
        end: f64,
    },
    Fill,
    Stroke,
    FillStyle(String),
    StrokeStyle(String),
    LineWidth(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintKind {
    Fill,
    Stroke,
}

/// A fill or stroke together with the path and style it used
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub kind: PaintKind,
    pub color: String,
    pub line_width: f64,
    /// `MoveTo`/`LineTo`/`Arc` commands since the last `BeginPath`
    pub path: Vec<DrawCommand>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `Clear` commands, i.e. frames started
    pub fn frames(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count()
    }

    /// Replay the commands into the fills/strokes they produce.
    ///
    /// Styles start at the canvas defaults (`#000`, width 1).
    pub fn paints(&self) -> Vec<Paint> {
        let mut fill_style = "#000".to_string();
        let mut stroke_style = "#000".to_string();
        let mut line_width = 1.0;
        let mut path = Vec::new();
        let mut paints = Vec::new();

        for command in &self.commands {
            match command {
                DrawCommand::BeginPath => path.clear(),
                DrawCommand::MoveTo(_) | DrawCommand::LineTo(_) | DrawCommand::Arc { .. } => {
                    path.push(command.clone())
                }
                DrawCommand::FillStyle(c) => fill_style = c.clone(),
                DrawCommand::StrokeStyle(c) => stroke_style = c.clone(),
                DrawCommand::LineWidth(w) => line_width = *w,
                DrawCommand::Fill => paints.push(Paint {
                    kind: PaintKind::Fill,
                    color: fill_style.clone(),
                    line_width,
                    path: path.clone(),
                }),
                DrawCommand::Stroke => paints.push(Paint {
                    kind: PaintKind::Stroke,
                    color: stroke_style.clone(),
                    line_width,
                    path: path.clone(),
                }),
                DrawCommand::Clear { .. } => {}
            }
        }

        paints
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo(DVec2::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo(DVec2::new(x, y)));
    }

    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) {
        self.commands.push(DrawCommand::Arc {
            center: DVec2::new(x, y),
            radius,
            start: start_angle,
            end: end_angle,
        });
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::FillStyle(color.to_string()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::StrokeStyle(color.to_string()));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::LineWidth(width));
    }
}
