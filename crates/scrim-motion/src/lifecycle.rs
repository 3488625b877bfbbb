//! Visibility lifecycle for overlays (sheets, drawers, dialogs, menus).
//!
//! The state machine is driven from two sides: external open intent (the
//! host's `open` prop) and dismiss-gesture commits. Content stays mounted
//! until the close animation actually finishes, so an overlay never pops
//! out mid-fade; a reopen while closing reverses the animation from its
//! current progress instead of snapping.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use scrim_core::frame_clock::FrameClock;
use scrim_input::{DragOutcome, DragResult};

use crate::easing::Easing;
use crate::motion_value::{MotionSpec, MotionValue, TweenSpec};
use crate::spring::SpringSpec;

/// Lifecycle state of an overlay, independent of its visual curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisibilityState {
    Closed,
    Opening,
    Open,
    Closing,
}

struct LifecycleInner {
    state: VisibilityState,
    mounted: bool,
    disposed: bool,
    open_spec: MotionSpec,
    close_spec: MotionSpec,
    snap_spec: SpringSpec,
    on_open_change: Option<Rc<dyn Fn(bool)>>,
    on_progress: Option<Rc<dyn Fn(f32)>>,
}

/// Overlay visibility controller.
///
/// Owns an animated progress in `[0, 1]` (0 fully closed, 1 fully open)
/// that the presentation layer maps to opacity/translation, plus the drag
/// offset of an in-flight dismiss gesture.
pub struct OverlayLifecycle {
    inner: Rc<RefCell<LifecycleInner>>,
    progress: MotionValue,
    drag_offset: MotionValue,
}

impl OverlayLifecycle {
    pub fn new(clock: FrameClock, initially_open: bool) -> Self {
        let inner = Rc::new(RefCell::new(LifecycleInner {
            state: if initially_open {
                VisibilityState::Open
            } else {
                VisibilityState::Closed
            },
            mounted: initially_open,
            disposed: false,
            open_spec: MotionSpec::Tween(TweenSpec::new(250, Easing::LinearOutSlowIn)),
            close_spec: MotionSpec::Tween(TweenSpec::new(200, Easing::FastOutLinearIn)),
            snap_spec: SpringSpec::for_pixels(),
            on_open_change: None,
            on_progress: None,
        }));

        let progress = MotionValue::new(if initially_open { 1.0 } else { 0.0 }, clock.clone());
        let drag_offset = MotionValue::new(0.0, clock);

        let weak = Rc::downgrade(&inner);
        progress.set_on_frame(move |value| {
            if let Some(inner) = weak.upgrade() {
                let observer = inner.borrow().on_progress.clone();
                if let Some(observer) = observer {
                    observer(value);
                }
            }
        });

        let weak = Rc::downgrade(&inner);
        let offset = drag_offset.clone();
        progress.set_on_settled(move |value| {
            Self::on_progress_settled(&weak, &offset, value);
        });

        Self {
            inner,
            progress,
            drag_offset,
        }
    }

    /// Replaces the default open/close/snap-back motion.
    pub fn set_motion_specs(&self, open: MotionSpec, close: MotionSpec, snap: SpringSpec) {
        let mut inner = self.inner.borrow_mut();
        inner.open_spec = open;
        inner.close_spec = close;
        inner.snap_spec = snap;
    }

    /// Fired when a terminal state is reached: `true` at Open, `false` at
    /// Closed (including gesture-committed dismissals, so the host can
    /// flip its `open` prop).
    pub fn set_on_open_change(&self, callback: impl Fn(bool) + 'static) {
        self.inner.borrow_mut().on_open_change = Some(Rc::new(callback));
    }

    /// Per-frame animation progress for the presentation layer.
    pub fn set_on_progress(&self, callback: impl Fn(f32) + 'static) {
        self.inner.borrow_mut().on_progress = Some(Rc::new(callback));
    }

    pub fn state(&self) -> VisibilityState {
        self.inner.borrow().state
    }

    /// Current animation progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    /// True until the close animation fully completes.
    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    /// Applies external open intent. Idempotent: repeating the current
    /// intent never restarts an animation. An opposite intent mid-flight
    /// reverses from the current progress value.
    pub fn set_open_intent(&self, open: bool) {
        let spec = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            if open {
                match inner.state {
                    VisibilityState::Closed | VisibilityState::Closing => {
                        inner.mounted = true;
                        inner.state = VisibilityState::Opening;
                        log::trace!("overlay -> Opening");
                        Some((1.0, inner.open_spec))
                    }
                    _ => None,
                }
            } else {
                match inner.state {
                    VisibilityState::Open | VisibilityState::Opening => {
                        inner.state = VisibilityState::Closing;
                        log::trace!("overlay -> Closing");
                        Some((0.0, inner.close_spec))
                    }
                    _ => None,
                }
            }
        };
        if let Some((target, spec)) = spec {
            self.progress.animate_to(target, spec);
        }
    }

    /// Forces Closing from any mounted state; used when a dismiss gesture
    /// commits.
    pub fn commit_close(&self) {
        let spec = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || !inner.mounted {
                return;
            }
            match inner.state {
                VisibilityState::Open | VisibilityState::Opening => {
                    inner.state = VisibilityState::Closing;
                    log::trace!("overlay -> Closing (gesture commit)");
                    Some(inner.close_spec)
                }
                _ => None,
            }
        };
        if let Some(spec) = spec {
            self.progress.animate_to(0.0, spec);
        }
    }

    /// Tracks an in-flight dismiss drag; the offset follows the finger.
    pub fn drag_by(&self, displacement: f32) {
        if self.inner.borrow().disposed {
            return;
        }
        self.drag_offset.snap_to(displacement);
    }

    /// Closing-positive offset of the in-flight (or snapping-back) drag.
    pub fn drag_offset(&self) -> f32 {
        self.drag_offset.value()
    }

    /// Resolves a finished dismiss gesture: Commit proceeds with closing,
    /// Cancel springs the drag offset back to rest, so the snap-back is
    /// proportional to how far the drag went.
    pub fn settle_drag(&self, result: &DragResult) {
        let snap_spec = {
            let inner = self.inner.borrow();
            if inner.disposed {
                return;
            }
            inner.snap_spec
        };
        match result.outcome {
            DragOutcome::Commit => self.commit_close(),
            DragOutcome::Cancel => {
                self.drag_offset.animate_to(0.0, MotionSpec::Spring(snap_spec));
            }
        }
    }

    /// Cancels all in-flight animation and guarantees no callback fires
    /// afterwards.
    pub fn dispose(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.disposed = true;
            inner.on_open_change = None;
            inner.on_progress = None;
        }
        self.progress.dispose();
        self.drag_offset.dispose();
    }

    fn on_progress_settled(
        weak: &Weak<RefCell<LifecycleInner>>,
        drag_offset: &MotionValue,
        value: f32,
    ) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let notification = {
            let mut inner = inner.borrow_mut();
            if inner.disposed {
                return;
            }
            match inner.state {
                VisibilityState::Opening if value >= 1.0 => {
                    inner.state = VisibilityState::Open;
                    log::trace!("overlay -> Open");
                    inner.on_open_change.clone().map(|cb| (cb, true))
                }
                VisibilityState::Closing if value <= 0.0 => {
                    inner.state = VisibilityState::Closed;
                    inner.mounted = false;
                    log::trace!("overlay -> Closed");
                    inner.on_open_change.clone().map(|cb| (cb, false))
                }
                _ => None,
            }
        };
        if let Some((callback, open)) = notification {
            callback(open);
        }
        // A fresh mount always starts from a resting drag offset.
        if value <= 0.0 {
            drag_offset.snap_to(0.0);
        }
    }
}

#[cfg(test)]
#[path = "tests/lifecycle_tests.rs"]
mod tests;
