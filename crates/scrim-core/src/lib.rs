//! Core runtime pieces for the scrim interaction engine: frame scheduling,
//! disposal registrations, layout direction handling, and gesture tunables.
//!
//! Everything here is single-threaded by design. Gesture and animation
//! callbacks run on the host's UI event loop; the scheduler only hands out
//! ids and replays callbacks when the host drains a frame.

pub mod config;
pub mod direction;
pub mod frame_clock;
pub mod scheduler;

pub use config::{CommitTunables, DialTunables, DragTunables};
pub use direction::{mirror, mirror_angle, resolve_edge, LayoutDirection, LogicalEdge, PhysicalEdge};
pub use frame_clock::{FrameClock, FrameRegistration};
pub use scheduler::{FrameCallbackId, FrameScheduler, SchedulerHandle};

pub mod prelude {
    pub use crate::config::{CommitTunables, DialTunables, DragTunables};
    pub use crate::direction::{
        mirror, mirror_angle, resolve_edge, LayoutDirection, LogicalEdge, PhysicalEdge,
    };
    pub use crate::frame_clock::{FrameClock, FrameRegistration};
    pub use crate::scheduler::{FrameCallbackId, FrameScheduler, SchedulerHandle};
}
