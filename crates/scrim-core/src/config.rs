//! Shared interaction tunables.
//!
//! The source components each carried slightly different hard-coded
//! thresholds; the engine exposes one configurable policy per concern with
//! the defaults below. Values are in logical pixels; very high-density
//! screens may want to scale them by the device's density factor.

/// Touch slop in logical pixels.
///
/// Pointer motion below this distance from the press position never produces
/// drag displacement, so taps on draggable surfaces don't nudge sheets.
/// 8.0 matches common platform conventions (Android's ViewConfiguration
/// touch slop is ~8dp at baseline density).
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum gesture velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity at baseline density;
/// release velocities are capped here before classification.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Fraction of the travel extent a drag must cover to commit.
pub const DISTANCE_THRESHOLD_FRACTION: f32 = 1.0 / 3.0;

/// Release velocity (px/s) above which a drag commits regardless of travel.
pub const VELOCITY_THRESHOLD: f32 = 500.0;

/// Touches closer than this to the dial center are ignored.
pub const MIN_TOUCH_RADIUS: f32 = 20.0;

/// Touches farther than `dial_radius + TOUCH_SLACK` from the center are
/// ignored, so edge-of-screen contacts don't register.
pub const TOUCH_SLACK: f32 = 20.0;

/// Boundary radius between the inner (0/13-23) and outer (1-12) rings of a
/// 24-hour dial. A fixed constant, never derived from gesture velocity.
pub const INNER_RING_RADIUS: f32 = 72.0;

/// Commit-vs-cancel policy for dismiss gestures.
///
/// A drag commits when it covers `distance_threshold_fraction` of the travel
/// extent OR releases faster than `velocity_threshold`, so a fast flick
/// commits with little travel and a slow full drag commits with none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommitTunables {
    pub distance_threshold_fraction: f32,
    pub velocity_threshold: f32,
}

impl Default for CommitTunables {
    fn default() -> Self {
        Self {
            distance_threshold_fraction: DISTANCE_THRESHOLD_FRACTION,
            velocity_threshold: VELOCITY_THRESHOLD,
        }
    }
}

/// Recognition tunables for a single drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTunables {
    pub touch_slop: f32,
    pub max_fling_velocity: f32,
}

impl Default for DragTunables {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            max_fling_velocity: MAX_FLING_VELOCITY,
        }
    }
}

/// Touch acceptance geometry for angular (clock dial) controls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialTunables {
    pub min_touch_radius: f32,
    pub touch_slack: f32,
    pub inner_ring_radius: f32,
}

impl Default for DialTunables {
    fn default() -> Self {
        Self {
            min_touch_radius: MIN_TOUCH_RADIUS,
            touch_slack: TOUCH_SLACK,
            inner_ring_radius: INNER_RING_RADIUS,
        }
    }
}
