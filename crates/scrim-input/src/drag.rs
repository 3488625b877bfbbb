//! Drag interpretation for dismissable overlays and continuous controls.
//!
//! A [`DragTracker`] consumes one gesture at a time: `begin`, any number of
//! `update`s, then `end`, which classifies the gesture as [`DragOutcome::Commit`]
//! or [`DragOutcome::Cancel`] from travel distance and release velocity.
//! Displacement is reported in closing-positive space: positive values move
//! the overlay toward dismissal, whatever the anchor edge or layout
//! direction.

use scrim_core::config::{CommitTunables, DragTunables};
use scrim_core::direction::{resolve_edge, LayoutDirection, LogicalEdge, PhysicalEdge};

/// Edge an overlay rests against; defines which way "closing" travel points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragAnchor {
    /// Bottom sheet: closing travel is downward (+y).
    Bottom,
    /// Overlay on the start edge (drawer, side sheet): closing travel points
    /// toward the start edge resolved against the layout direction.
    Start,
    /// Overlay on the end edge.
    End,
}

/// Whether displacement opposite the closing direction is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelMode {
    /// Dismiss gestures: the overlay cannot be dragged past its resting
    /// position, so opposite-direction travel clamps to zero.
    ClosingOnly,
    /// Continuous controls track both directions.
    Bidirectional,
}

/// Gesture outcome at release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Proceed with the intended action (dismiss, select).
    Commit,
    /// Snap back to the pre-gesture state.
    Cancel,
}

/// Computed once per gesture release. Not retained afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragResult {
    /// Closing-positive displacement in px at release.
    pub displacement: f32,
    /// Closing-positive release velocity in px/s, capped.
    pub velocity: f32,
    pub outcome: DragOutcome,
}

/// Commit iff the drag covered more than `distance_threshold_fraction` of
/// `extent` OR released faster than `velocity_threshold`. The OR means a
/// fast flick commits with little travel and a slow full-distance drag
/// commits with near-zero velocity.
pub fn classify(
    displacement: f32,
    velocity: f32,
    extent: f32,
    tunables: &CommitTunables,
) -> DragOutcome {
    let by_distance = extent.is_finite()
        && extent > 0.0
        && displacement.abs() > extent * tunables.distance_threshold_fraction;
    let by_velocity = velocity.abs() > tunables.velocity_threshold;
    if by_distance || by_velocity {
        DragOutcome::Commit
    } else {
        DragOutcome::Cancel
    }
}

struct ActiveDrag {
    origin: f32,
    latest: f32,
    closing_sign: f32,
    slop_passed: bool,
    accumulated: f32,
    tracker: crate::velocity_tracker::VelocityTracker,
}

impl ActiveDrag {
    fn displacement(&self, mode: TravelMode) -> f32 {
        if !self.slop_passed {
            return 0.0;
        }
        let displacement = (self.latest - self.origin) * self.closing_sign;
        match mode {
            TravelMode::ClosingOnly => displacement.max(0.0),
            TravelMode::Bidirectional => displacement,
        }
    }
}

/// Interprets one 1D drag gesture at a time.
///
/// The layout direction is sampled once at `begin` — layout changes during
/// a gesture take effect on the next one.
pub struct DragTracker {
    anchor: DragAnchor,
    mode: TravelMode,
    tunables: DragTunables,
    active: Option<ActiveDrag>,
}

impl DragTracker {
    pub fn new(anchor: DragAnchor, mode: TravelMode, tunables: DragTunables) -> Self {
        Self {
            anchor,
            mode,
            tunables,
            active: None,
        }
    }

    /// Starts tracking a gesture at `position`. A `begin` while another
    /// gesture is active replaces it (the host recognizer guarantees one
    /// active drag per instance; this is belt-and-braces).
    pub fn begin(&mut self, position: f32, time_ms: i64, direction: LayoutDirection) {
        if !position.is_finite() {
            return;
        }
        let closing_sign = match self.anchor {
            DragAnchor::Bottom => 1.0,
            DragAnchor::Start | DragAnchor::End => {
                let edge = match self.anchor {
                    DragAnchor::Start => LogicalEdge::Start,
                    _ => LogicalEdge::End,
                };
                match resolve_edge(edge, direction) {
                    PhysicalEdge::Left => -1.0,
                    PhysicalEdge::Right => 1.0,
                }
            }
        };

        let mut tracker = crate::velocity_tracker::VelocityTracker::new();
        tracker.push(time_ms, 0.0);
        self.active = Some(ActiveDrag {
            origin: position,
            latest: position,
            closing_sign,
            slop_passed: self.tunables.touch_slop <= 0.0,
            accumulated: 0.0,
            tracker,
        });
    }

    /// Feeds a move sample. A no-op without a preceding `begin`, or for
    /// non-finite positions.
    pub fn update(&mut self, position: f32, time_ms: i64) {
        if !position.is_finite() {
            return;
        }
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if !active.slop_passed {
            active.accumulated += (position - active.latest).abs();
            if active.accumulated > self.tunables.touch_slop {
                active.slop_passed = true;
            }
        }
        active.latest = position;
        active
            .tracker
            .push(time_ms, (position - active.origin) * active.closing_sign);
    }

    /// Finishes the gesture and classifies it. Returns `None` without a
    /// preceding `begin`.
    pub fn end(
        &mut self,
        position: f32,
        time_ms: i64,
        extent: f32,
        policy: &CommitTunables,
    ) -> Option<DragResult> {
        self.update(position, time_ms);
        let active = self.active.take()?;

        let displacement = active.displacement(self.mode);
        let velocity = active
            .tracker
            .velocity_capped(self.tunables.max_fling_velocity);
        let outcome = classify(displacement, velocity, extent, policy);
        log::debug!(
            "drag end: displacement={displacement:.1} velocity={velocity:.0} extent={extent:.0} -> {outcome:?}"
        );
        Some(DragResult {
            displacement,
            velocity,
            outcome,
        })
    }

    /// Drops in-flight gesture state (pointer-capture loss, disposal).
    pub fn cancel(&mut self) {
        self.active = None;
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Current closing-positive displacement, for per-frame rendering of the
    /// dragged overlay. Zero while below touch slop or between gestures.
    pub fn displacement(&self) -> f32 {
        self.active
            .as_ref()
            .map(|active| active.displacement(self.mode))
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
#[path = "tests/drag_tests.rs"]
mod tests;
