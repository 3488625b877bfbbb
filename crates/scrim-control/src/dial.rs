//! Angular value mapping for clock dials.
//!
//! Angles are degrees in `[0, 360)` with 0 at the 12 o'clock position,
//! growing clockwise. Touches outside the acceptance band (too close to the
//! center, or past the dial edge plus slack) map to no value at all rather
//! than to a wrong one.

use scrim_core::config::DialTunables;
use scrim_core::direction::{mirror_angle, LayoutDirection};

/// Placement of a dial on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialGeometry {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

/// Which ring of a two-ring (24-hour) dial a touch landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialRing {
    Outer,
    Inner,
}

/// What the dial selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialMode {
    /// 0..=59, one mark per 6 degrees.
    Minutes,
    /// 1..=12, one mark per 30 degrees.
    Hours12,
    /// Outer ring 1..=12, inner ring 0 and 13..=23.
    Hours24,
}

/// An accepted touch: direction-resolved angle plus the ring it landed on.
///
/// Single-ring modes ignore the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialHit {
    pub angle: f32,
    pub ring: DialRing,
}

/// Angle of `(x, y)` around `(cx, cy)`, 12 o'clock zero, clockwise positive.
pub fn angle_for_point(x: f32, y: f32, cx: f32, cy: f32) -> f32 {
    let dx = x - cx;
    let dy = y - cy;
    // Screen y grows downward; 12 o'clock is (0, -1).
    let degrees = dx.atan2(-dy).to_degrees();
    (degrees + 360.0) % 360.0
}

/// Resolves a touch against the dial, or rejects it.
///
/// Rejections: non-finite coordinates, touches closer to the center than
/// `min_touch_radius`, and touches farther than `radius + touch_slack`.
pub fn hit_for_point(
    x: f32,
    y: f32,
    geometry: DialGeometry,
    tunables: &DialTunables,
    direction: LayoutDirection,
) -> Option<DialHit> {
    if !(x.is_finite() && y.is_finite()) {
        return None;
    }
    let dx = x - geometry.center_x;
    let dy = y - geometry.center_y;
    let distance = (dx * dx + dy * dy).sqrt();

    if distance < tunables.min_touch_radius || distance > geometry.radius + tunables.touch_slack {
        log::trace!(
            "dial touch rejected: distance={distance:.1} (accepting {}..{})",
            tunables.min_touch_radius,
            geometry.radius + tunables.touch_slack
        );
        return None;
    }

    let ring = if distance <= tunables.inner_ring_radius {
        DialRing::Inner
    } else {
        DialRing::Outer
    };
    let angle = mirror_angle(angle_for_point(x, y, geometry.center_x, geometry.center_y), direction);
    Some(DialHit { angle, ring })
}

/// Nearest minute mark: 6 degrees per minute.
pub fn minute_for_angle(angle: f32) -> u8 {
    ((angle / 6.0).round() as u32 % 60) as u8
}

fn hour12_for_angle(angle: f32) -> u8 {
    let mark = (angle / 30.0).round() as u32 % 12;
    if mark == 0 {
        12
    } else {
        mark as u8
    }
}

/// Domain value for an accepted touch under the given mode.
pub fn value_for_hit(hit: DialHit, mode: DialMode) -> u8 {
    match mode {
        DialMode::Minutes => minute_for_angle(hit.angle),
        DialMode::Hours12 => hour12_for_angle(hit.angle),
        DialMode::Hours24 => match hit.ring {
            DialRing::Outer => hour12_for_angle(hit.angle),
            DialRing::Inner => {
                let hour = hour12_for_angle(hit.angle);
                // The inner 12 o'clock mark is midnight.
                if hour == 12 {
                    0
                } else {
                    hour + 12
                }
            }
        },
    }
}
