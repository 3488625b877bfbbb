//! Frame-driven animated scalar.

use std::cell::RefCell;
use std::rc::Rc;

use scrim_core::frame_clock::{FrameClock, FrameRegistration};

use crate::easing::Easing;
use crate::spring::{step_spring, SpringSpec};

/// Timed transition: duration, easing, optional start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenSpec {
    pub duration_ms: u64,
    pub easing: Easing,
    pub delay_ms: u64,
}

impl TweenSpec {
    pub fn new(duration_ms: u64, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
            delay_ms: 0,
        }
    }

    pub fn linear(duration_ms: u64) -> Self {
        Self::new(duration_ms, Easing::Linear)
    }

    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self::new(300, Easing::FastOutSlowIn)
    }
}

/// How a [`MotionValue`] travels to its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionSpec {
    Tween(TweenSpec),
    Spring(SpringSpec),
}

impl Default for MotionSpec {
    fn default() -> Self {
        MotionSpec::Tween(TweenSpec::default())
    }
}

struct Inner {
    clock: FrameClock,
    current: f32,
    velocity: f32,
    start: f32,
    target: f32,
    spec: MotionSpec,
    start_time_nanos: Option<u64>,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameRegistration>,
    animating: bool,
    disposed: bool,
    on_frame: Option<Rc<dyn Fn(f32)>>,
    on_settled: Option<Rc<dyn Fn(f32)>>,
}

/// A scalar that animates toward a target on the host's frame clock.
///
/// Retargeting mid-flight continues from the current value (springs also
/// keep their velocity), never snapping to either endpoint first. Every
/// scheduled frame is held as a [`FrameRegistration`], so dropping or
/// disposing the value cancels the animation outright.
pub struct MotionValue {
    inner: Rc<RefCell<Inner>>,
}

impl MotionValue {
    pub fn new(initial: f32, clock: FrameClock) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                clock,
                current: initial,
                velocity: 0.0,
                start: initial,
                target: initial,
                spec: MotionSpec::default(),
                start_time_nanos: None,
                last_frame_nanos: None,
                registration: None,
                animating: false,
                disposed: false,
                on_frame: None,
                on_settled: None,
            })),
        }
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().current
    }

    pub fn velocity(&self) -> f32 {
        self.inner.borrow().velocity
    }

    pub fn target(&self) -> f32 {
        self.inner.borrow().target
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().animating
    }

    /// Observer invoked with the current value on every animated frame.
    pub fn set_on_frame(&self, callback: impl Fn(f32) + 'static) {
        self.inner.borrow_mut().on_frame = Some(Rc::new(callback));
    }

    /// Invoked once with the final value when an animation settles.
    pub fn set_on_settled(&self, callback: impl Fn(f32) + 'static) {
        self.inner.borrow_mut().on_settled = Some(Rc::new(callback));
    }

    /// Starts animating from the current value toward `target`.
    pub fn animate_to(&self, target: f32, spec: MotionSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || !target.is_finite() {
                return;
            }
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current;
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.animating = true;
            if let MotionSpec::Tween(_) = spec {
                inner.velocity = 0.0;
            }
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jumps to `value` without animating, cancelling any flight in
    /// progress. The frame observer still sees the new value.
    pub fn snap_to(&self, value: f32) {
        let observer = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || !value.is_finite() {
                return;
            }
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.current = value;
            inner.start = value;
            inner.target = value;
            inner.velocity = 0.0;
            inner.start_time_nanos = None;
            inner.last_frame_nanos = None;
            inner.animating = false;
            inner.on_frame.clone()
        };
        if let Some(observer) = observer {
            observer(value);
        }
    }

    /// Cancels the in-flight animation and silences both callbacks. No
    /// callback fires after this returns.
    pub fn dispose(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.disposed = true;
        inner.animating = false;
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.on_frame = None;
        inner.on_settled = None;
    }

    fn schedule_frame(this: &Rc<RefCell<Inner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.disposed || inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame_tick(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame_tick(this: &Rc<RefCell<Inner>>, frame_time_nanos: u64) {
        enum Advance {
            Continue,
            Settled,
        }

        let (advance, observer, settled_callback, value) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if inner.disposed || !inner.animating {
                return;
            }

            let advance = match inner.spec {
                MotionSpec::Tween(spec) => {
                    let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
                    let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
                    let delay_nanos = spec.delay_ms * 1_000_000;

                    if elapsed_nanos < delay_nanos {
                        Advance::Continue
                    } else {
                        let duration_nanos = (spec.duration_ms * 1_000_000).max(1);
                        let linear = ((elapsed_nanos - delay_nanos) as f32
                            / duration_nanos as f32)
                            .clamp(0.0, 1.0);
                        let eased = spec.easing.transform(linear);
                        inner.current = inner.start + (inner.target - inner.start) * eased;

                        if linear >= 1.0 {
                            inner.current = inner.target;
                            Advance::Settled
                        } else {
                            Advance::Continue
                        }
                    }
                }
                MotionSpec::Spring(spec) => {
                    let last = inner.last_frame_nanos.replace(frame_time_nanos);
                    let dt_secs = match last {
                        Some(last) => {
                            frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0
                        }
                        // First frame only establishes the time base.
                        None => 0.0,
                    };
                    if dt_secs > 0.0 {
                        let (value, velocity) = step_spring(
                            &spec,
                            inner.current,
                            inner.velocity,
                            inner.target,
                            dt_secs,
                        );
                        inner.current = value;
                        inner.velocity = velocity;
                    }
                    if spec.is_settled(inner.current, inner.velocity, inner.target) {
                        inner.current = inner.target;
                        inner.velocity = 0.0;
                        Advance::Settled
                    } else {
                        Advance::Continue
                    }
                }
            };

            if let Advance::Settled = advance {
                inner.animating = false;
                inner.start = inner.target;
                inner.start_time_nanos = None;
                inner.last_frame_nanos = None;
            }

            (
                matches!(advance, Advance::Continue),
                inner.on_frame.clone(),
                inner.on_settled.clone(),
                inner.current,
            )
        };

        // Reschedule before invoking observers, so a dispose() or retarget
        // from inside a callback supersedes this frame's continuation.
        if advance {
            Self::schedule_frame(this);
        }

        if let Some(observer) = observer {
            observer(value);
        }
        // The observer may have disposed us; the settle notification must
        // not outlive that.
        if !advance && !this.borrow().disposed {
            if let Some(settled) = settled_callback {
                settled(value);
            }
        }
    }
}

impl Clone for MotionValue {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/motion_value_tests.rs"]
mod tests;
