//! Gesture input interpretation: bounded velocity tracking over pointer
//! samples and commit-vs-cancel classification of dismiss drags.
//!
//! Delivery is host-driven and strictly sequential per gesture instance.
//! Out-of-order calls (`update`/`end` without `begin`) are no-ops rather
//! than errors; the host gesture recognizer controls timing and is not
//! fully trusted here.

pub mod drag;
pub mod velocity_tracker;

pub use drag::{classify, DragAnchor, DragOutcome, DragResult, DragTracker, TravelMode};
pub use velocity_tracker::VelocityTracker;

pub mod prelude {
    pub use crate::drag::{
        classify, DragAnchor, DragOutcome, DragResult, DragTracker, TravelMode,
    };
    pub use crate::velocity_tracker::VelocityTracker;
}
