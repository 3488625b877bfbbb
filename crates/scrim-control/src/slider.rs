//! Gesture-driven controllers for continuous controls.
//!
//! These compose the drag interpreter with value mapping and settled-change
//! emission, and own the callback surface the presentation layer subscribes
//! to: `on_value_change` per settled change during the drag,
//! `on_value_commit` exactly once at gesture end.

use crate::bounded::BoundedValue;
use crate::dial::{hit_for_point, value_for_hit, DialGeometry, DialMode};
use crate::gate::ChangeGate;
use crate::track::value_for_position;
use scrim_core::config::{CommitTunables, DialTunables, DragTunables};
use scrim_core::direction::LayoutDirection;
use scrim_input::{DragAnchor, DragTracker, TravelMode};

/// Measured placement of a slider track at gesture time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    /// Leading physical edge of the track in px.
    pub origin: f32,
    /// Track length in px.
    pub extent: f32,
}

type ValueCallback<T> = Box<dyn Fn(T)>;
type HapticCallback = Box<dyn Fn()>;

/// Slider state: a bounded value driven by 1D pointer positions.
///
/// The slider is the source of truth for its value between gestures; hosts
/// write external prop changes through [`set_value`](Self::set_value).
/// During a gesture the raw value follows the pointer continuously while
/// emissions are quantized and edge-triggered.
pub struct SliderController {
    value: BoundedValue,
    gate: ChangeGate<f32>,
    drag: DragTracker,
    geometry: TrackGeometry,
    direction: LayoutDirection,
    haptic_on_step_change: bool,
    disabled: bool,
    disposed: bool,
    on_value_change: Option<ValueCallback<f32>>,
    on_value_commit: Option<ValueCallback<f32>>,
    on_haptic: Option<HapticCallback>,
}

impl SliderController {
    pub fn new(value: BoundedValue, haptic_on_step_change: bool) -> Self {
        Self {
            value,
            gate: ChangeGate::new(),
            // Velocity is tracked toward the end edge, so it is signed in
            // value space whatever the layout direction.
            drag: DragTracker::new(
                DragAnchor::End,
                TravelMode::Bidirectional,
                DragTunables::default(),
            ),
            geometry: TrackGeometry {
                origin: 0.0,
                extent: 0.0,
            },
            direction: LayoutDirection::Ltr,
            haptic_on_step_change,
            disabled: false,
            disposed: false,
            on_value_change: None,
            on_value_commit: None,
            on_haptic: None,
        }
    }

    pub fn set_on_value_change(&mut self, callback: impl Fn(f32) + 'static) {
        self.on_value_change = Some(Box::new(callback));
    }

    pub fn set_on_value_commit(&mut self, callback: impl Fn(f32) + 'static) {
        self.on_value_commit = Some(Box::new(callback));
    }

    /// Host hook for haptic pulses, fired per settled change while
    /// `haptic_on_step_change` is set.
    pub fn set_on_haptic(&mut self, callback: impl Fn() + 'static) {
        self.on_haptic = Some(Box::new(callback));
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.drag.cancel();
        }
    }

    /// External prop write. Does not fire callbacks: the host already knows.
    pub fn set_value(&mut self, value: f32) {
        self.value.set_raw(value);
    }

    pub fn value(&self) -> f32 {
        self.value.quantized()
    }

    pub fn raw_value(&self) -> f32 {
        self.value.raw()
    }

    fn interactive(&self) -> bool {
        !self.disabled && !self.disposed
    }

    /// Starts a gesture. Pressing the track jumps the value under the
    /// finger, so the first settled emission fires immediately.
    pub fn gesture_begin(
        &mut self,
        position: f32,
        time_ms: i64,
        geometry: TrackGeometry,
        direction: LayoutDirection,
    ) {
        if !self.interactive() {
            return;
        }
        self.geometry = geometry;
        self.direction = direction;
        self.gate.reset();
        self.drag.begin(position, time_ms, direction);
        self.apply_position(position);
    }

    pub fn gesture_update(&mut self, position: f32, time_ms: i64) {
        if !self.interactive() || !self.drag.is_active() {
            return;
        }
        self.drag.update(position, time_ms);
        self.apply_position(position);
    }

    /// Ends the gesture. For a slider, "commit" means the gesture ended:
    /// the commit callback fires exactly once with the settled value,
    /// independent of dismiss thresholds. Returns the committed value.
    pub fn gesture_end(&mut self, position: f32, time_ms: i64) -> Option<f32> {
        if !self.interactive() {
            self.drag.cancel();
            return None;
        }
        self.drag
            .end(position, time_ms, self.geometry.extent, &CommitTunables::default())?;
        self.apply_position(position);
        let committed = self.value.quantized();
        if let Some(callback) = &self.on_value_commit {
            callback(committed);
        }
        Some(committed)
    }

    /// Cancels callbacks and gesture state. No callback fires afterwards.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.drag.cancel();
        self.on_value_change = None;
        self.on_value_commit = None;
        self.on_haptic = None;
    }

    fn apply_position(&mut self, position: f32) {
        let raw = value_for_position(
            position,
            self.geometry.origin,
            self.geometry.extent,
            self.value.min(),
            self.value.max(),
            self.direction,
        );
        self.value.set_raw(raw);
        if let Some(settled) = self.gate.offer(self.value.quantized()) {
            if let Some(callback) = &self.on_value_change {
                callback(settled);
            }
            if self.haptic_on_step_change {
                if let Some(haptic) = &self.on_haptic {
                    haptic();
                }
            }
        }
    }
}

/// Clock-dial state: a `u8` selection driven by 2D pointer positions.
///
/// Rejected touches (outside the acceptance band) leave the selection
/// untouched; the control simply doesn't respond to that sample.
pub struct DialController {
    mode: DialMode,
    geometry: DialGeometry,
    tunables: DialTunables,
    gate: ChangeGate<u8>,
    selected: Option<u8>,
    active: bool,
    direction: LayoutDirection,
    haptic_on_step_change: bool,
    disabled: bool,
    disposed: bool,
    on_value_change: Option<ValueCallback<u8>>,
    on_value_commit: Option<ValueCallback<u8>>,
    on_haptic: Option<HapticCallback>,
}

impl DialController {
    pub fn new(
        mode: DialMode,
        geometry: DialGeometry,
        tunables: DialTunables,
        haptic_on_step_change: bool,
    ) -> Self {
        Self {
            mode,
            geometry,
            tunables,
            gate: ChangeGate::new(),
            selected: None,
            active: false,
            direction: LayoutDirection::Ltr,
            haptic_on_step_change,
            disabled: false,
            disposed: false,
            on_value_change: None,
            on_value_commit: None,
            on_haptic: None,
        }
    }

    pub fn set_on_value_change(&mut self, callback: impl Fn(u8) + 'static) {
        self.on_value_change = Some(Box::new(callback));
    }

    pub fn set_on_value_commit(&mut self, callback: impl Fn(u8) + 'static) {
        self.on_value_commit = Some(Box::new(callback));
    }

    pub fn set_on_haptic(&mut self, callback: impl Fn() + 'static) {
        self.on_haptic = Some(Box::new(callback));
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.active = false;
        }
    }

    /// External prop write (e.g. the text field half of a time picker).
    pub fn set_value(&mut self, value: u8) {
        self.selected = Some(value);
    }

    pub fn value(&self) -> Option<u8> {
        self.selected
    }

    fn interactive(&self) -> bool {
        !self.disabled && !self.disposed
    }

    pub fn gesture_begin(&mut self, x: f32, y: f32, direction: LayoutDirection) {
        if !self.interactive() {
            return;
        }
        self.active = true;
        self.direction = direction;
        self.gate.reset();
        self.apply_touch(x, y);
    }

    pub fn gesture_update(&mut self, x: f32, y: f32) {
        if !self.interactive() || !self.active {
            return;
        }
        self.apply_touch(x, y);
    }

    /// Ends the gesture, committing the current selection (if any touch was
    /// accepted at all). Returns the committed value.
    pub fn gesture_end(&mut self) -> Option<u8> {
        if !self.interactive() || !self.active {
            self.active = false;
            return None;
        }
        self.active = false;
        let committed = self.selected?;
        if let Some(callback) = &self.on_value_commit {
            callback(committed);
        }
        Some(committed)
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
        self.active = false;
        self.on_value_change = None;
        self.on_value_commit = None;
        self.on_haptic = None;
    }

    fn apply_touch(&mut self, x: f32, y: f32) {
        let Some(hit) = hit_for_point(x, y, self.geometry, &self.tunables, self.direction) else {
            return;
        };
        let value = value_for_hit(hit, self.mode);
        self.selected = Some(value);
        if let Some(settled) = self.gate.offer(value) {
            if let Some(callback) = &self.on_value_change {
                callback(settled);
            }
            if self.haptic_on_step_change {
                if let Some(haptic) = &self.on_haptic {
                    haptic();
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
