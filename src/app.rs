//! Top-level wiring: config → scene + controller, redraw on every tick

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::config::{ConfigError, VizConfig};
use crate::platform::FrameScheduler;
use crate::renderer::{Scene, Surface};
use crate::sim::{Pose, SimulationController, Trajectory};

/// A drawable scene plus the controller that animates it
pub struct Visualization<S: Surface + 'static, F: FrameScheduler + 'static> {
    scene: Rc<Scene>,
    surface: Rc<RefCell<S>>,
    controller: SimulationController<F>,
    initial_pose: Pose,
}

impl<S: Surface + 'static, F: FrameScheduler + 'static> Visualization<S, F> {
    pub fn new(config: &VizConfig, surface: S, scheduler: F) -> Result<Self, ConfigError> {
        config.validate()?;

        let trajectory = Trajectory::circular(config.trajectory.radius, config.trajectory.points)
            .ok_or(ConfigError::EmptyTrajectory)?;
        let scene = Rc::new(Scene::new(config, trajectory.points().to_vec()));
        let controller = SimulationController::new(config.initial_pose, trajectory, scheduler);

        log::info!(
            "Scene: {} trajectory points (r={}m), {} obstacles, {}x{} px @ {} px/m",
            scene.trajectory.len(),
            config.trajectory.radius,
            scene.obstacles.len(),
            config.canvas.width,
            config.canvas.height,
            config.canvas.scale
        );

        Ok(Self {
            scene,
            surface: Rc::new(RefCell::new(surface)),
            controller,
            initial_pose: config.initial_pose,
        })
    }

    /// Repaint the current pose
    pub fn draw(&self) {
        let pose = self.controller.pose();
        self.scene.draw(&mut *self.surface.borrow_mut(), &pose);
    }

    /// Start (or restart) the animation, redrawing after every tick
    pub fn start(&self) {
        let scene = self.scene.clone();
        let surface = self.surface.clone();
        self.controller
            .start(move |pose| scene.draw(&mut *surface.borrow_mut(), pose));
    }

    pub fn stop(&self) {
        self.controller.stop();
    }

    /// Stop, restore the initial pose and repaint once
    pub fn reset(&self) {
        self.controller.reset(self.initial_pose);
        self.draw();
    }

    pub fn controller(&self) -> &SimulationController<F> {
        &self.controller
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn surface(&self) -> Ref<'_, S> {
        self.surface.borrow()
    }

    /// Mutable access between frames, e.g. to drain a recording surface
    pub fn surface_mut(&self) -> RefMut<'_, S> {
        self.surface.borrow_mut()
    }

    pub fn initial_pose(&self) -> Pose {
        self.initial_pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ManualScheduler;
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn viz() -> Visualization<RecordingSurface, ManualScheduler> {
        Visualization::new(
            &VizConfig::default(),
            RecordingSurface::new(),
            ManualScheduler::new(16.0),
        )
        .expect("default config is valid")
    }

    #[test]
    fn test_draw_paints_one_frame() {
        let viz = viz();
        viz.draw();
        assert_eq!(viz.surface().frames(), 1);
        assert_eq!(viz.controller().pose(), viz.initial_pose());
    }

    #[test]
    fn test_start_redraws_every_tick() {
        let viz = viz();
        viz.start();
        assert_eq!(viz.surface().frames(), 1);
        for _ in 0..3 {
            viz.controller().scheduler().run_frame();
        }
        assert_eq!(viz.surface().frames(), 4);
        assert_eq!(viz.controller().index(), 4);
    }

    #[test]
    fn test_restart_does_not_double_frames() {
        let viz = viz();
        viz.start();
        viz.start();
        assert_eq!(viz.controller().scheduler().run_frame(), 1);
        assert_eq!(viz.surface().frames(), 3);
    }

    #[test]
    fn test_reset_redraws_initial_pose_and_halts() {
        let viz = viz();
        viz.start();
        viz.controller().scheduler().run_frame();
        viz.reset();

        assert_eq!(viz.controller().pose(), viz.initial_pose());
        assert_eq!(viz.controller().index(), 0);
        assert!(!viz.controller().is_running());
        assert_eq!(viz.surface().frames(), 3);

        viz.controller().scheduler().run_frame();
        assert_eq!(viz.surface().frames(), 3);
    }

    #[test]
    fn test_stop_freezes_pose() {
        let viz = viz();
        viz.start();
        viz.stop();
        let pose = viz.controller().pose();
        viz.controller().scheduler().run_frame();
        assert_eq!(viz.controller().pose(), pose);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = VizConfig::default();
        config.trajectory.points = 0;
        let result = Visualization::new(&config, RecordingSurface::new(), ManualScheduler::new(16.0));
        assert!(matches!(result, Err(ConfigError::EmptyTrajectory)));
    }

    #[test]
    fn test_oversized_trajectory_rejected() {
        let mut config = VizConfig::default();
        config.trajectory.points = usize::MAX;
        let result = Visualization::new(&config, RecordingSurface::new(), ManualScheduler::new(16.0));
        assert!(matches!(result, Err(ConfigError::TooManyPoints { .. })));
    }

    #[test]
    fn test_drained_surface_holds_only_new_frames() {
        let viz = viz();
        viz.start();
        let first = viz.surface_mut().take_commands();
        assert!(!first.is_empty());
        assert_eq!(viz.surface().frames(), 0);

        viz.controller().scheduler().run_frame();
        let second = viz.surface_mut().take_commands();
        let clears = second
            .iter()
            .filter(|c| matches!(c, DrawCommand::Clear { .. }))
            .count();
        assert_eq!(clears, 1);
        assert_eq!(second.len(), first.len());
        assert!(viz.surface().commands().is_empty());
    }
}
