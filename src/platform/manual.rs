//! Manually pumped frame scheduler
//!
//! Callbacks queue up until `run_frame` is called. Each call runs the
//! callbacks that were queued before it started, so a callback that
//! reschedules itself runs once per frame.

use std::cell::{Cell, RefCell};

use super::{FrameCallback, FrameScheduler};

#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<(u32, FrameCallback)>>,
    next_id: Cell<u32>,
    /// Frame timestamp in milliseconds
    time: Cell<f64>,
    frame_ms: f64,
}

impl ManualScheduler {
    /// Scheduler advancing `frame_ms` per frame
    pub fn new(frame_ms: f64) -> Self {
        Self {
            frame_ms,
            ..Default::default()
        }
    }

    /// Number of callbacks waiting for the next frame
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Advance one frame and run everything queued for it.
    ///
    /// Returns the number of callbacks executed.
    pub fn run_frame(&self) -> usize {
        let time = self.time.get() + self.frame_ms;
        self.time.set(time);

        // Take the queue first: callbacks may request or cancel frames
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let count = due.len();
        for (_, callback) in due {
            callback(time);
        }
        count
    }

    pub fn time(&self) -> f64 {
        self.time.get()
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u32;

    fn request_frame(&self, callback: FrameCallback) -> u32 {
        let id = self.next_id.get().wrapping_add(1);
        self.next_id.set(id);
        self.queue.borrow_mut().push((id, callback));
        id
    }

    fn cancel_frame(&self, handle: u32) {
        self.queue.borrow_mut().retain(|(id, _)| *id != handle);
    }
}
