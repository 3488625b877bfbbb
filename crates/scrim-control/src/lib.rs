//! Continuous-control value mapping: pointer positions to bounded domain
//! values (slider tracks, clock dials), step quantization at emission time,
//! and edge-triggered change notification.

pub mod bounded;
pub mod dial;
pub mod gate;
pub mod slider;
pub mod track;

pub use bounded::BoundedValue;
pub use dial::{
    angle_for_point, hit_for_point, minute_for_angle, value_for_hit, DialGeometry, DialHit,
    DialMode, DialRing,
};
pub use gate::ChangeGate;
pub use slider::{DialController, SliderController, TrackGeometry};
pub use track::{position_for_value, value_for_position};

pub mod prelude {
    pub use crate::bounded::BoundedValue;
    pub use crate::dial::{
        angle_for_point, hit_for_point, minute_for_angle, value_for_hit, DialGeometry, DialHit,
        DialMode, DialRing,
    };
    pub use crate::gate::ChangeGate;
    pub use crate::slider::{DialController, SliderController, TrackGeometry};
    pub use crate::track::{position_for_value, value_for_position};
}
