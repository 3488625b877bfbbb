//! 1D pointer velocity estimation using the impulse strategy.
//!
//! Velocity is derived from the kinetic energy imparted by the gesture over
//! a bounded trailing window, which is far more robust against sample jitter
//! than a two-point difference at release.

use smallvec::SmallVec;

/// Ring buffer capacity. Only a bounded trailing window is ever retained.
const WINDOW: usize = 20;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between consecutive samples means the pointer stopped;
/// everything before the gap is discarded.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy)]
struct Sample {
    time_ms: i64,
    offset: f32,
}

/// Impulse-based velocity tracker over absolute 1D positions.
///
/// Feed every pointer sample of the active gesture with [`push`], read the
/// release velocity with [`velocity`] or [`velocity_capped`], and [`reset`]
/// between gestures.
///
/// [`push`]: VelocityTracker::push
/// [`velocity`]: VelocityTracker::velocity
/// [`velocity_capped`]: VelocityTracker::velocity_capped
#[derive(Clone)]
pub struct VelocityTracker {
    samples: [Option<Sample>; WINDOW],
    head: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; WINDOW],
            head: 0,
        }
    }

    /// Records a position sample. Non-finite offsets are dropped.
    pub fn push(&mut self, time_ms: i64, offset: f32) {
        if !offset.is_finite() {
            return;
        }
        self.head = (self.head + 1) % WINDOW;
        self.samples[self.head] = Some(Sample { time_ms, offset });
    }

    /// Estimated velocity in px/s. Zero with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let newest = match self.samples[self.head] {
            Some(sample) => sample,
            None => return 0.0,
        };

        // Walk backwards from the newest sample, keeping only samples inside
        // the horizon and not separated by a stopped-pointer gap. Collected
        // oldest-first for the impulse pass below.
        let mut window: SmallVec<[Sample; WINDOW]> = SmallVec::new();
        let mut index = self.head;
        let mut later = newest;
        loop {
            let Some(sample) = self.samples[index] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            let gap = later.time_ms - sample.time_ms;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            window.push(sample);
            later = sample;

            index = if index == 0 { WINDOW - 1 } else { index - 1 };
            if window.len() == WINDOW {
                break;
            }
        }
        window.reverse();

        if window.len() < 2 {
            return 0.0;
        }

        impulse_velocity(&window) * 1000.0
    }

    /// Velocity clamped into `[-max, max]`. A non-finite or non-positive
    /// `max` yields zero.
    pub fn velocity_capped(&self, max: f32) -> f32 {
        if !max.is_finite() || max <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max, max)
    }

    pub fn reset(&mut self) {
        self.samples = [None; WINDOW];
        self.head = 0;
    }
}

/// Impulse estimator: accumulates the work each segment's velocity change
/// contributes, then converts the kinetic energy back into a signed
/// velocity (px/ms here; the caller scales to px/s).
fn impulse_velocity(window: &[Sample]) -> f32 {
    let mut work = 0.0f32;
    for (segment, pair) in window.windows(2).enumerate() {
        let dt = (pair[1].time_ms - pair[0].time_ms) as f32;
        if dt == 0.0 {
            continue;
        }
        let v_curr = (pair[1].offset - pair[0].offset) / dt;
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if segment == 0 {
            work *= 0.5;
        }
    }
    energy_to_velocity(work)
}

/// E = ½mv² with unit mass, keeping the sign of the energy.
#[inline]
fn energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
