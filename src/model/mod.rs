// src/model/mod.rs
//! Timing model: checkpoint times, leg arithmetic, and the ranked registry.

pub mod participant;
pub mod registry;
pub mod time;

pub use participant::{Checkpoint, Participant, LEG_COUNT};
pub use registry::Registry;
pub use time::{duration, format_duration, format_gap, TimePoint};
