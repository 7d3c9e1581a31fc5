//! Per-frame translation and rotation inside the ring

use super::state::Fighter;
use crate::tuning::Tuning;

/// Apply one frame of movement from the fighter's button state.
///
/// Each axis is guarded against the ring edge using the pre-move position, so
/// a fighter stops one step short of the rope rather than crossing it.
/// Returns whether the fighter translated or rotated.
pub fn integrate(fighter: &mut Fighter, tuning: &Tuning, frame_count: u64) -> bool {
    let step = tuning.move_step;
    let ring = &tuning.ring;
    let buttons = fighter.buttons;
    let mut moved = false;

    if buttons.up && fighter.position.y - step > ring.min.y {
        fighter.position.y -= step;
        moved = true;
    }

    if buttons.down && fighter.position.y + fighter.size.y + step < ring.max.y {
        fighter.position.y += step;
        moved = true;
    }

    if buttons.left && fighter.position.x - step > ring.min.x {
        fighter.position.x -= step;
        moved = true;
    }

    if buttons.right && fighter.position.x + fighter.size.x + step < ring.max.x {
        fighter.position.x += step;
        moved = true;
    }

    if buttons.rotate_cw {
        fighter.angle += tuning.angle_step;
        moved = true;
    }

    if buttons.rotate_ccw {
        fighter.angle -= tuning.angle_step;
        moved = true;
    }

    // Shared counter: both lobsters step in lockstep
    if moved && frame_count % tuning.leg_move_rate_frames == 0 {
        fighter.legs_extended = !fighter.legs_extended;
    }

    moved
}
