//! Linear track mapping between pointer positions and domain values.

use scrim_core::direction::LayoutDirection;

/// Maps a pointer position along a track to a domain value in `[min, max]`.
///
/// `origin` is the leading physical edge of the track and `extent` its
/// length in px. Under RTL the value axis runs the other way along the same
/// physical track. A non-positive or non-finite `extent` yields `min`.
pub fn value_for_position(
    position: f32,
    origin: f32,
    extent: f32,
    min: f32,
    max: f32,
    direction: LayoutDirection,
) -> f32 {
    if !(extent.is_finite() && extent > 0.0) || !position.is_finite() || max <= min {
        return min;
    }
    let mut fraction = ((position - origin) / extent).clamp(0.0, 1.0);
    if direction.is_rtl() {
        fraction = 1.0 - fraction;
    }
    min + fraction * (max - min)
}

/// Inverse of [`value_for_position`]: where the thumb for `value` sits.
///
/// Round-trips exactly with `value_for_position` for in-range values.
pub fn position_for_value(
    value: f32,
    origin: f32,
    extent: f32,
    min: f32,
    max: f32,
    direction: LayoutDirection,
) -> f32 {
    if !(extent.is_finite() && extent > 0.0) || max <= min {
        return origin;
    }
    let mut fraction = ((value - min) / (max - min)).clamp(0.0, 1.0);
    if direction.is_rtl() {
        fraction = 1.0 - fraction;
    }
    origin + fraction * extent
}
