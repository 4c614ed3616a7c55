//! Ownership of callbacks handed to the host
//!
//! A host frame callback must stay alive until it has run or been
//! cancelled, and must not be dropped while it is running. Entries are
//! kept here keyed by the host's request id and released by `sweep`
//! (finished) or `cancel` (never ran).

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Lifecycle of one retained callback, updated by the callback itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameState {
    #[default]
    Pending,
    Running,
    Done,
}

struct Entry<T> {
    id: i32,
    state: Rc<Cell<FrameState>>,
    value: T,
}

pub struct RetainedFrames<T> {
    entries: RefCell<Vec<Entry<T>>>,
}

impl<T> Default for RetainedFrames<T> {
    fn default() -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
        }
    }
}

impl<T> RetainedFrames<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `value` alive until its state reaches `Done` or it is cancelled
    pub fn insert(&self, id: i32, state: Rc<Cell<FrameState>>, value: T) {
        self.entries.borrow_mut().push(Entry { id, state, value });
    }

    /// Release every entry that finished running
    pub fn sweep(&self) {
        let finished: Vec<T> = {
            let mut entries = self.entries.borrow_mut();
            let (done, live) = std::mem::take(&mut *entries)
                .into_iter()
                .partition(|e| e.state.get() == FrameState::Done);
            *entries = live;
            done.into_iter().map(|e| e.value).collect()
        };
        // Dropped outside the borrow
        drop(finished);
    }

    /// Release `id` unless it is currently running.
    ///
    /// Returns whether an entry was released.
    pub fn cancel(&self, id: i32) -> bool {
        let released = {
            let mut entries = self.entries.borrow_mut();
            entries
                .iter()
                .position(|e| e.id == id && e.state.get() != FrameState::Running)
                .map(|pos| entries.swap_remove(pos).value)
        };
        released.is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts how many values were dropped
    struct DropCounter(Rc<Cell<u32>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn entry(
        frames: &RetainedFrames<DropCounter>,
        id: i32,
        drops: &Rc<Cell<u32>>,
    ) -> Rc<Cell<FrameState>> {
        let state = Rc::new(Cell::new(FrameState::Pending));
        frames.insert(id, state.clone(), DropCounter(drops.clone()));
        state
    }

    #[test]
    fn test_sweep_releases_only_finished() {
        let frames = RetainedFrames::new();
        let drops = Rc::new(Cell::new(0));
        let first = entry(&frames, 1, &drops);
        let second = entry(&frames, 2, &drops);
        let _third = entry(&frames, 3, &drops);

        first.set(FrameState::Done);
        second.set(FrameState::Running);
        frames.sweep();
        assert_eq!(drops.get(), 1);
        assert_eq!(frames.len(), 2);

        second.set(FrameState::Done);
        frames.sweep();
        assert_eq!(drops.get(), 2);
        assert_eq!(frames.len(), 1);
    }

    #[test]
    fn test_cancel_releases_pending_entry() {
        let frames = RetainedFrames::new();
        let drops = Rc::new(Cell::new(0));
        entry(&frames, 7, &drops);

        assert!(frames.cancel(7));
        assert_eq!(drops.get(), 1);
        assert!(frames.is_empty());
        assert!(!frames.cancel(7));
    }

    #[test]
    fn test_cancel_keeps_running_entry_until_done() {
        let frames = RetainedFrames::new();
        let drops = Rc::new(Cell::new(0));
        let state = entry(&frames, 4, &drops);
        state.set(FrameState::Running);

        assert!(!frames.cancel(4));
        assert_eq!(drops.get(), 0);

        state.set(FrameState::Done);
        frames.sweep();
        assert_eq!(drops.get(), 1);
        assert!(frames.is_empty());
    }

    #[test]
    fn test_repeated_frames_stay_bounded() {
        let frames = RetainedFrames::new();
        let drops = Rc::new(Cell::new(0));
        for id in 0..100 {
            frames.sweep();
            let state = entry(&frames, id, &drops);
            state.set(FrameState::Done);
        }
        frames.sweep();
        assert!(frames.is_empty());
        assert_eq!(drops.get(), 100);
    }
}
