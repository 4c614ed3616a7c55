//! Robot body and heading indicator

use glam::DVec2;

use super::Surface;
use super::shapes::{circle, segment};
use crate::sim::Pose;
use crate::transform::CoordinateTransformer;

#[derive(Debug, Clone, Copy)]
pub struct RobotStyle<'a> {
    /// Body radius in pixels
    pub size: f64,
    /// Heading line length in pixels
    pub direction_length: f64,
    pub body_color: &'a str,
    pub heading_color: &'a str,
}

pub fn draw_robot(
    surface: &mut impl Surface,
    transformer: &CoordinateTransformer,
    pose: &Pose,
    style: RobotStyle<'_>,
) {
    let pos = transformer.world_to_canvas(pose.position());
    circle(surface, pos, style.size, style.body_color);

    // Canvas y grows downward, so the heading's sine is negated
    let tip = pos
        + DVec2::new(pose.theta.cos(), -pose.theta.sin()) * style.direction_length;
    surface.set_stroke_style(style.heading_color);
    surface.set_line_width(2.0);
    segment(surface, pos, tip);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, PaintKind, RecordingSurface};
    use std::f64::consts::FRAC_PI_2;

    const STYLE: RobotStyle<'static> = RobotStyle {
        size: 15.0,
        direction_length: 25.0,
        body_color: "#4CAF50",
        heading_color: "#000",
    };

    #[test]
    fn test_body_then_heading() {
        let t = CoordinateTransformer::new(800.0, 800.0, 100.0);
        let mut surface = RecordingSurface::new();
        draw_robot(&mut surface, &t, &Pose::new(0.0, -2.0, 0.0), STYLE);

        let paints = surface.paints();
        assert_eq!(paints.len(), 2);
        assert_eq!(paints[0].kind, PaintKind::Fill);
        assert_eq!(paints[0].color, "#4CAF50");
        assert!(matches!(
            paints[0].path[0],
            DrawCommand::Arc { center, radius, .. }
                if center == DVec2::new(400.0, 600.0) && radius == 15.0
        ));

        assert_eq!(paints[1].kind, PaintKind::Stroke);
        assert_eq!(
            paints[1].path,
            vec![
                DrawCommand::MoveTo(DVec2::new(400.0, 600.0)),
                DrawCommand::LineTo(DVec2::new(425.0, 600.0)),
            ]
        );
    }

    #[test]
    fn test_heading_up_points_to_canvas_top() {
        let t = CoordinateTransformer::new(800.0, 800.0, 100.0);
        let mut surface = RecordingSurface::new();
        draw_robot(&mut surface, &t, &Pose::new(0.0, 0.0, FRAC_PI_2), STYLE);

        let paints = surface.paints();
        match paints[1].path[1] {
            DrawCommand::LineTo(tip) => {
                assert!((tip.x - 400.0).abs() < 1e-9);
                assert!((tip.y - 375.0).abs() < 1e-9);
            }
            ref other => panic!("unexpected {:?}", other),
        }
    }
}
