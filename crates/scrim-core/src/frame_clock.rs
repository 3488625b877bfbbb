//! Frame clock facade with disposal tokens.
//!
//! Every scheduled frame hands back a [`FrameRegistration`]. Dropping the
//! registration (or calling [`FrameRegistration::cancel`]) guarantees the
//! callback never runs — this is how `dispose()` on the stateful components
//! prevents callbacks from firing into unmounted state.

use crate::scheduler::{FrameCallbackId, SchedulerHandle};

#[derive(Clone)]
pub struct FrameClock {
    scheduler: SchedulerHandle,
}

impl FrameClock {
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self { scheduler }
    }

    pub fn scheduler(&self) -> SchedulerHandle {
        self.scheduler.clone()
    }

    /// Schedules `callback` for the next drained frame, passing the frame
    /// time in nanoseconds.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameRegistration {
        match self.scheduler.register_frame_callback(callback) {
            Some(id) => FrameRegistration::new(self.scheduler.clone(), id),
            None => FrameRegistration::inactive(self.scheduler.clone()),
        }
    }

    pub fn with_frame_millis(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameRegistration {
        self.with_frame_nanos(move |nanos| callback(nanos / 1_000_000))
    }
}

/// Handle to one pending frame callback. Cancelled on drop.
pub struct FrameRegistration {
    scheduler: SchedulerHandle,
    id: Option<FrameCallbackId>,
}

impl FrameRegistration {
    fn new(scheduler: SchedulerHandle, id: FrameCallbackId) -> Self {
        Self {
            scheduler,
            id: Some(id),
        }
    }

    fn inactive(scheduler: SchedulerHandle) -> Self {
        Self {
            scheduler,
            id: None,
        }
    }

    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel_frame_callback(id);
        }
    }
}
