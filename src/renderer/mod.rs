//! Presentation boundary
//!
//! Turns simulation state into draw-ready values. Window, texture loading and
//! draw-call sequencing belong to the host.

pub mod vertex;
pub mod view;

pub use vertex::{SpriteInstance, colors};
pub use view::{FighterView, MatchView, SpriteFrame, WinScreen};
