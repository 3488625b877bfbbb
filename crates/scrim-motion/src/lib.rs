//! Motion for overlays and controls: easing curves, spring physics, a
//! frame-driven animated scalar, and the visibility lifecycle state machine
//! that ties them to open/close intent and dismiss gestures.

pub mod easing;
pub mod lifecycle;
pub mod motion_value;
pub mod spring;

pub use easing::{CubicBezier, Easing};
pub use lifecycle::{OverlayLifecycle, VisibilityState};
pub use motion_value::{MotionSpec, MotionValue, TweenSpec};
pub use spring::SpringSpec;

pub mod prelude {
    pub use crate::easing::{CubicBezier, Easing};
    pub use crate::lifecycle::{OverlayLifecycle, VisibilityState};
    pub use crate::motion_value::{MotionSpec, MotionValue, TweenSpec};
    pub use crate::spring::SpringSpec;
}
