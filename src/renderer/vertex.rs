//! GPU-side sprite instance data

use bytemuck::{Pod, Zeroable};

use super::view::FighterView;
use crate::consts::DEG_TO_RAD;
use crate::sim::HeartState;

/// Instance flag: flip the sprite horizontally
pub const FLAG_MIRRORED: u32 = 1;

/// One rotated, textured quad, laid out for an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Top-left of the destination rectangle
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// Rotation pivot relative to `position`
    pub pivot: [f32; 2],
    /// Radians, clockwise
    pub rotation: f32,
    /// Texture array layer (the sprite frame selector)
    pub layer: u32,
    pub flags: u32,
    /// Heart level for the HUD tint: 0 full, 1 half, 2 empty
    pub heart: u32,
}

impl SpriteInstance {
    pub fn from_view(view: &FighterView) -> Self {
        let heart = match view.heart {
            HeartState::Full => 0,
            HeartState::Half => 1,
            HeartState::Empty => 2,
        };
        Self {
            position: view.position.to_array(),
            size: view.size.to_array(),
            pivot: view.pivot.to_array(),
            rotation: view.angle * DEG_TO_RAD,
            layer: view.frame.selector(),
            flags: if view.mirrored { FLAG_MIRRORED } else { 0 },
            heart,
        }
    }

    pub fn is_mirrored(&self) -> bool {
        self.flags & FLAG_MIRRORED != 0
    }
}

/// Colors for game elements
pub mod colors {
    /// Sandy ring floor
    pub const BACKGROUND: [f32; 4] = [224.0 / 255.0, 193.0 / 255.0, 164.0 / 255.0, 1.0];
}
