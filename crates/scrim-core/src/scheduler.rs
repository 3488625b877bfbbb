//! One-shot frame callback registry.
//!
//! The host's render loop owns a [`FrameScheduler`] and calls
//! [`SchedulerHandle::drain_frame_callbacks`] once per frame with the frame
//! time. Components schedule work through cloned handles; a handle outliving
//! the scheduler degrades to a no-op rather than firing into torn-down state.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use rustc_hash::FxHashMap;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64) + 'static>;

struct SchedulerInner {
    next_id: Cell<FrameCallbackId>,
    callbacks: RefCell<FxHashMap<FrameCallbackId, FrameCallback>>,
    needs_frame: Cell<bool>,
}

impl SchedulerInner {
    fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            callbacks: RefCell::new(FxHashMap::default()),
            needs_frame: Cell::new(false),
        }
    }

    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.callbacks.borrow_mut().insert(id, callback);
        self.needs_frame.set(true);
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut callbacks = self.callbacks.borrow_mut();
        callbacks.remove(&id);
        if callbacks.is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn drain(&self, frame_time_nanos: u64) {
        // Snapshot the ids present at drain start. Callbacks registered while
        // draining get larger ids and run on the next frame; callbacks
        // cancelled mid-drain are removed from the map and skipped here.
        let mut due: Vec<FrameCallbackId> = self.callbacks.borrow().keys().copied().collect();
        due.sort_unstable();

        for id in due {
            let callback = self.callbacks.borrow_mut().remove(&id);
            if let Some(callback) = callback {
                callback(frame_time_nanos);
            }
        }

        if self.callbacks.borrow().is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn needs_frame(&self) -> bool {
        self.needs_frame.get()
    }
}

/// Owner side of the registry. Lives with the host's event loop; dropping it
/// invalidates every outstanding [`SchedulerHandle`].
pub struct FrameScheduler {
    inner: Rc<SchedulerInner>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SchedulerInner::new()),
        }
    }

    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Cheap cloneable reference into the registry. All operations on a handle
/// whose scheduler is gone are silent no-ops.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<SchedulerInner>,
}

impl SchedulerHandle {
    /// Registers a one-shot callback for the next drained frame.
    ///
    /// Returns `None` when the scheduler has been dropped.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        match self.inner.upgrade() {
            Some(inner) => Some(inner.register(Box::new(callback))),
            None => {
                log::trace!("frame callback dropped: scheduler is gone");
                None
            }
        }
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel(id);
        }
    }

    /// Runs every callback registered before this call, in registration
    /// order, passing `frame_time_nanos` to each.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain(frame_time_nanos);
        }
    }

    /// True while at least one callback is waiting, so the host can idle
    /// instead of scheduling empty frames.
    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame())
            .unwrap_or(false)
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
