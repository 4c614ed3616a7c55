//! Full-frame composition: grid, trajectory, obstacles, robot

use super::Surface;
use super::grid::{GridStyle, draw_grid};
use super::robot::{RobotStyle, draw_robot};
use super::shapes::{circle, polyline};
use crate::config::{CanvasConfig, Colors, VizConfig};
use crate::sim::{Obstacle, Pose, TrajectoryPoint};
use crate::transform::CoordinateTransformer;

/// Everything static in a frame; only the pose changes between draws
#[derive(Debug, Clone)]
pub struct Scene {
    pub transformer: CoordinateTransformer,
    pub trajectory: Vec<TrajectoryPoint>,
    pub obstacles: Vec<Obstacle>,
    pub canvas: CanvasConfig,
    pub colors: Colors,
}

impl Scene {
    pub fn new(config: &VizConfig, trajectory: Vec<TrajectoryPoint>) -> Self {
        Self {
            transformer: CoordinateTransformer::from_config(&config.canvas),
            trajectory,
            obstacles: config.obstacles.clone(),
            canvas: config.canvas.clone(),
            colors: config.colors.clone(),
        }
    }

    /// Clear and repaint the whole canvas for `pose`
    pub fn draw(&self, surface: &mut impl Surface, pose: &Pose) {
        surface.clear(self.transformer.width(), self.transformer.height());

        draw_grid(
            surface,
            &self.transformer,
            self.canvas.grid_range,
            GridStyle {
                grid_color: &self.colors.grid,
                axes_color: &self.colors.axes,
            },
        );
        self.draw_trajectory(surface);
        self.draw_obstacles(surface);
        draw_robot(
            surface,
            &self.transformer,
            pose,
            RobotStyle {
                size: self.canvas.robot_size,
                direction_length: self.canvas.direction_length,
                body_color: &self.colors.robot,
                heading_color: &self.colors.heading,
            },
        );
    }

    pub fn draw_trajectory(&self, surface: &mut impl Surface) {
        surface.set_stroke_style(&self.colors.trajectory);
        surface.set_line_width(2.0);
        polyline(
            surface,
            self.trajectory
                .iter()
                .map(|p| self.transformer.world_to_canvas(p.position())),
        );
    }

    pub fn draw_obstacles(&self, surface: &mut impl Surface) {
        for obstacle in &self.obstacles {
            let pos = self.transformer.world_to_canvas(obstacle.position());
            circle(surface, pos, self.canvas.obstacle_size, &self.colors.obstacle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{DrawCommand, PaintKind, RecordingSurface};
    use crate::sim::generate_circular;
    use glam::DVec2;

    fn default_scene() -> (VizConfig, Scene) {
        let config = VizConfig::default();
        let points = generate_circular(config.trajectory.radius, config.trajectory.points);
        let scene = Scene::new(&config, points);
        (config, scene)
    }

    #[test]
    fn test_frame_layer_order() {
        let (config, scene) = default_scene();
        let mut surface = RecordingSurface::new();
        scene.draw(&mut surface, &config.initial_pose);

        assert_eq!(
            surface.commands()[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 800.0
            }
        );
        assert_eq!(surface.frames(), 1);

        let paints = surface.paints();
        // 18 grid lines + 2 axes + trajectory + 3 obstacles + body + heading
        assert_eq!(paints.len(), 26);

        assert!(paints[..18].iter().all(|p| p.color == "#ddd"));
        assert!(paints[18..20].iter().all(|p| p.color == "#000" && p.line_width == 2.0));

        assert_eq!(paints[20].color, "#2196F3");
        assert_eq!(paints[20].kind, PaintKind::Stroke);
        assert_eq!(paints[20].path.len(), 50);

        assert!(
            paints[21..24]
                .iter()
                .all(|p| p.kind == PaintKind::Fill && p.color == "#F44336")
        );

        assert_eq!(paints[24].kind, PaintKind::Fill);
        assert_eq!(paints[24].color, "#4CAF50");
        assert_eq!(paints[25].kind, PaintKind::Stroke);
    }

    #[test]
    fn test_obstacles_at_world_positions() {
        let (_, scene) = default_scene();
        let mut surface = RecordingSurface::new();
        scene.draw_obstacles(&mut surface);

        let centers: Vec<DVec2> = surface
            .paints()
            .iter()
            .map(|p| match p.path[0] {
                DrawCommand::Arc { center, radius, .. } => {
                    assert_eq!(radius, 10.0);
                    center
                }
                ref other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(
            centers,
            vec![
                DVec2::new(300.0, 500.0),
                DVec2::new(500.0, 300.0),
                DVec2::new(400.0, 200.0),
            ]
        );
    }

    #[test]
    fn test_trajectory_starts_at_first_point() {
        let (_, scene) = default_scene();
        let mut surface = RecordingSurface::new();
        scene.draw_trajectory(&mut surface);

        let paints = surface.paints();
        assert_eq!(paints[0].path[0], DrawCommand::MoveTo(DVec2::new(600.0, 400.0)));
    }
}
