//! Simulation module
//!
//! Pure kinematic state plus the frame-driven controller. No rendering or
//! DOM dependencies live here; frames arrive through `platform::FrameScheduler`.

pub mod controller;
pub mod state;
pub mod trajectory;

pub use controller::{SimulationController, UpdateCallback};
pub use state::{Obstacle, Pose, SimPhase, TrajectoryPoint};
pub use trajectory::{Trajectory, generate_circular};
