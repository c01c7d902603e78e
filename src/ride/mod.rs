//! Rides: archetype presets and the operation state machine

pub mod archetype;
pub mod ride;

pub use archetype::RideKind;
pub use ride::{QueueStats, Ride};
