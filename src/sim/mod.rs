//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per simulated frame)
//! - Stable update order (red, then blue)
//! - No rendering, clock, or platform dependencies

pub mod collision;
pub mod movement;
pub mod punch;
pub mod state;
pub mod tick;

pub use collision::{first_hurtbox_hit, hurtbox_points, punch_connects, punch_point};
pub use state::{
    Button, ButtonState, Circle, Fighter, HeartState, MatchEvent, MatchState, PunchState, Ring,
    Side,
};
pub use tick::{KnockoutTiming, tick};
