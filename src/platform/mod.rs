//! Platform abstraction layer
//!
//! Boundary between the simulation and whatever hosts it:
//! - Input events (keys to per-fighter buttons, quit signal)
//! - Time/ticks (fixed-timestep frame clock)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputMapper, InputMode, InputOutcome, Key, KeyAction, KeyBindings, KeyEvent};
