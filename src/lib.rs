//! Lobster Boxing - two-player arcade boxing in a square ring
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, punch state machine, collisions, match flow)
//! - `platform`: Input mapping and the fixed-timestep frame clock
//! - `renderer`: Render-facing views of the simulation
//! - `tuning`: Data-driven game constants
//! - `settings`: Player-facing options and key bindings
//! - `session`: Glue that a frontend drives once per host frame

pub mod error;
pub mod platform;
pub mod renderer;
pub mod script;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use session::{Control, Session};
pub use settings::{InputMode, KnockoutTiming, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Fixed simulation period (25 Hz)
    pub const FRAME_RATE_IN_MS: u64 = 40;
    /// Frames between gait flips while moving
    pub const LEG_MOVE_RATE_IN_FRAMES: u64 = 5;

    /// Window (logical presentation) size
    pub const WINDOW_WIDTH: f32 = 800.0;
    /// Ring edges, inset from the window
    pub const RING_START: f32 = 50.0;
    pub const RING_END: f32 = WINDOW_WIDTH - RING_START;

    /// Per-frame translation step (pixels)
    pub const MOVE_STEP: f32 = 5.0;
    /// Per-frame rotation step (degrees)
    pub const ANGLE_STEP: f32 = 2.0;

    /// Punch timing, all in frames
    pub const BTW_PUNCHES_TIME_IN_FRAMES: u32 = 8;
    pub const WINDUP_TIME_IN_FRAMES: u32 = 6;
    pub const PUNCH_TIME_IN_FRAMES: u32 = 6;
    /// Win screen display time (3 seconds at 25 Hz)
    pub const GAME_OVER_TIME_IN_FRAMES: u32 = 75;

    /// Lobster sprite dimensions
    pub const FIGHTER_WIDTH: f32 = 128.0;
    pub const FIGHTER_HEIGHT: f32 = 128.0;

    /// Starting poses (x, y, angle in degrees); red faces right, blue faces left
    pub const RED_START: (f32, f32, f32) = (150.0, 336.0, 90.0);
    pub const BLUE_START: (f32, f32, f32) = (522.0, 336.0, -90.0);

    /// Hurtbox circles (radius, offset along facing axis), head to tail.
    /// Negative offsets point toward the claws.
    pub const HURTBOXES: [(f32, f32); 4] = [(18.0, -30.0), (22.0, -4.0), (18.0, 22.0), (12.0, 44.0)];
    /// Fist reach while punching
    pub const PUNCHBOX: (f32, f32) = (14.0, -66.0);

    /// Degrees to radians
    pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
}

/// Unit vector along a fighter's facing axis.
///
/// Sprites are drawn claws-up, so the axis is taken at `angle + 90` degrees
/// and forward offsets are negative.
#[inline]
pub fn facing_axis(angle_deg: f32) -> Vec2 {
    let theta = (angle_deg + 90.0) * consts::DEG_TO_RAD;
    Vec2::new(theta.cos(), theta.sin())
}

/// Offset `distance` units along the facing axis for `angle_deg`
#[inline]
pub fn facing_offset(angle_deg: f32, distance: f32) -> Vec2 {
    facing_axis(angle_deg) * distance
}

/// Strict circle overlap: touching circles do not overlap
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}
