//! Browser frame scheduling via `requestAnimationFrame`

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::retained::{FrameState, RetainedFrames};
use super::{FrameCallback, FrameScheduler};

pub struct AnimationFrameScheduler {
    window: web_sys::Window,
    /// Closures the browser still holds a reference to
    frames: RetainedFrames<Closure<dyn FnMut(f64)>>,
}

impl AnimationFrameScheduler {
    pub fn new(window: web_sys::Window) -> Self {
        Self {
            window,
            frames: RetainedFrames::new(),
        }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    /// `None` when the browser refused the request
    type Handle = Option<i32>;

    fn request_frame(&self, callback: FrameCallback) -> Option<i32> {
        self.frames.sweep();

        let state = Rc::new(Cell::new(FrameState::Pending));
        let flag = state.clone();
        let closure: Closure<dyn FnMut(f64)> = Closure::once(move |time: f64| {
            flag.set(FrameState::Running);
            callback(time);
            flag.set(FrameState::Done);
        });

        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => {
                self.frames.insert(id, state, closure);
                Some(id)
            }
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&self, handle: Option<i32>) {
        let Some(id) = handle else {
            return;
        };
        if let Err(e) = self.window.cancel_animation_frame(id) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", id, e);
        }
        if !self.frames.cancel(id) {
            log::debug!("Frame {} already running or released", id);
        }
    }
}
