//! Frame-driven simulation controller
//!
//! Owns the robot pose and the cursor into the trajectory. While running,
//! every frame moves the pose a fixed fraction of the way toward the current
//! target, faces it along the motion, advances the cursor and calls the
//! redraw callback.
//!
//! Cancellation: each run of the loop carries an epoch. `stop` cancels the
//! pending frame *and* bumps the epoch, so a tick that was already handed to
//! the host can never mutate the pose once it has been invalidated.

use std::cell::{Ref, RefCell};
use std::rc::{Rc, Weak};

use super::state::{Pose, SimPhase};
use super::trajectory::Trajectory;
use crate::consts::APPROACH_GAIN;
use crate::platform::FrameScheduler;

/// Redraw hook invoked with the new pose after every tick
pub type UpdateCallback = Rc<RefCell<dyn FnMut(&Pose)>>;

struct LoopState<H> {
    pose: Pose,
    trajectory: Trajectory,
    index: usize,
    phase: SimPhase,
    epoch: u64,
    pending: Option<H>,
}

impl<H> LoopState<H> {
    fn advance(&mut self) -> Pose {
        let target = self.trajectory.point(self.index);
        self.pose.approach(target.position(), APPROACH_GAIN);
        self.index = self.trajectory.next_index(self.index);
        log::trace!(
            "tick: pose=({:.3}, {:.3}, {:.3}) next={}",
            self.pose.x,
            self.pose.y,
            self.pose.theta,
            self.index
        );
        self.pose
    }
}

struct Shared<S: FrameScheduler> {
    state: RefCell<LoopState<S::Handle>>,
    scheduler: S,
}

/// Idle/running state machine driving the robot along its trajectory
pub struct SimulationController<S: FrameScheduler + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: FrameScheduler + 'static> Clone for SimulationController<S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S: FrameScheduler + 'static> SimulationController<S> {
    pub fn new(initial: Pose, trajectory: Trajectory, scheduler: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(LoopState {
                    pose: initial,
                    trajectory,
                    index: 0,
                    phase: SimPhase::Idle,
                    epoch: 0,
                    pending: None,
                }),
                scheduler,
            }),
        }
    }

    /// Start (or restart) the tick loop.
    ///
    /// Any previous loop is stopped first. The first tick runs immediately,
    /// later ticks run once per frame.
    pub fn start(&self, on_update: impl FnMut(&Pose) + 'static) {
        self.stop();
        let epoch = {
            let mut state = self.shared.state.borrow_mut();
            state.phase = SimPhase::Running;
            state.epoch
        };
        log::info!("Simulation started");
        let on_update: UpdateCallback = Rc::new(RefCell::new(on_update));
        run_tick(&self.shared, epoch, &on_update);
    }

    /// Cancel any scheduled tick and go idle
    pub fn stop(&self) {
        let pending = {
            let mut state = self.shared.state.borrow_mut();
            state.epoch = state.epoch.wrapping_add(1);
            state.phase = SimPhase::Idle;
            state.pending.take()
        };
        if let Some(handle) = pending {
            log::debug!("Cancelling pending frame {:?}", handle);
            self.shared.scheduler.cancel_frame(handle);
        }
    }

    /// Stop and restore `initial`, rewinding to the first trajectory point
    pub fn reset(&self, initial: Pose) {
        self.stop();
        let mut state = self.shared.state.borrow_mut();
        state.pose = initial;
        state.index = 0;
        log::info!(
            "Simulation reset to ({:.2}, {:.2}, {:.2})",
            initial.x,
            initial.y,
            initial.theta
        );
    }

    /// Run a single tick body without touching the scheduler
    pub fn step(&self) -> Pose {
        self.shared.state.borrow_mut().advance()
    }

    pub fn pose(&self) -> Pose {
        self.shared.state.borrow().pose
    }

    /// Index of the trajectory point targeted by the next tick
    pub fn index(&self) -> usize {
        self.shared.state.borrow().index
    }

    pub fn phase(&self) -> SimPhase {
        self.shared.state.borrow().phase
    }

    pub fn is_running(&self) -> bool {
        self.phase() == SimPhase::Running
    }

    pub fn trajectory(&self) -> Ref<'_, Trajectory> {
        Ref::map(self.shared.state.borrow(), |s| &s.trajectory)
    }

    pub fn scheduler(&self) -> &S {
        &self.shared.scheduler
    }
}

fn run_tick<S: FrameScheduler + 'static>(
    shared: &Rc<Shared<S>>,
    epoch: u64,
    on_update: &UpdateCallback,
) {
    let pose = {
        let mut state = shared.state.borrow_mut();
        if state.epoch != epoch || state.phase != SimPhase::Running {
            return;
        }
        state.pending = None;
        state.advance()
    };

    // No borrow is held here so the callback may read or stop the controller
    (&mut *on_update.borrow_mut())(&pose);

    if shared.state.borrow().epoch != epoch {
        return;
    }

    let weak: Weak<Shared<S>> = Rc::downgrade(shared);
    let next = on_update.clone();
    let handle = shared.scheduler.request_frame(Box::new(move |_time: f64| {
        if let Some(shared) = weak.upgrade() {
            run_tick(&shared, epoch, &next);
        }
    }));
    shared.state.borrow_mut().pending = Some(handle);
}
