//! Platform abstraction layer
//!
//! Browser events arrive at arbitrary times between frames. They are folded
//! into an [`InputState`] and sampled once per tick, so the simulation never
//! sees the event-dispatch mechanism.

pub mod input;

pub use input::{Direction, InputState};
