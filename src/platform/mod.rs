//! Platform abstraction layer
//!
//! Frame scheduling differs between the browser and native:
//! - `web`: `requestAnimationFrame` / `cancelAnimationFrame`
//! - `manual`: an explicit queue pumped by the caller (native demo, tests)
//! - `retained`: keeps host-held callbacks alive until they run or are cancelled

pub mod manual;
pub mod retained;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use manual::ManualScheduler;
#[cfg(target_arch = "wasm32")]
pub use web::AnimationFrameScheduler;

/// Callback run before the next repaint; receives a timestamp in milliseconds
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// "Run this before the next repaint" plus its cancel primitive
pub trait FrameScheduler {
    /// Token identifying one scheduled callback
    type Handle: Copy + std::fmt::Debug;

    fn request_frame(&self, callback: FrameCallback) -> Self::Handle;

    /// Drop a scheduled callback. Unknown or already-run handles are ignored.
    fn cancel_frame(&self, handle: Self::Handle);
}
