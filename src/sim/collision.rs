//! Punchbox vs hurtbox collision
//!
//! Both shapes are circles hung off a fighter's body center along its facing
//! axis, so a hit test is a handful of circle-overlap checks.

use glam::Vec2;

use super::state::{Circle, Fighter};
use crate::{circles_overlap, facing_offset};

/// Where a body-mounted circle sits in ring coordinates
#[inline]
pub fn body_point(fighter: &Fighter, circle: &Circle) -> Vec2 {
    fighter.world_center() + facing_offset(fighter.angle, circle.offset)
}

/// Center of the attacker's fist
pub fn punch_point(attacker: &Fighter) -> Vec2 {
    body_point(attacker, &attacker.punchbox)
}

/// Centers of the defender's hurtboxes, in evaluation order
pub fn hurtbox_points(defender: &Fighter) -> [Vec2; 4] {
    defender.hurtbox.map(|circle| body_point(defender, &circle))
}

/// Index of the first hurtbox the attacker's fist overlaps, if any
pub fn first_hurtbox_hit(attacker: &Fighter, defender: &Fighter) -> Option<usize> {
    let fist = punch_point(attacker);
    let reach = attacker.punchbox.radius;

    defender
        .hurtbox
        .iter()
        .position(|circle| circles_overlap(fist, reach, body_point(defender, circle), circle.radius))
}

/// Whether the attacker's punch connects this frame
pub fn punch_connects(attacker: &Fighter, defender: &Fighter) -> bool {
    first_hurtbox_hit(attacker, defender).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Side;
    use crate::tuning::Tuning;

    fn fighters() -> (Fighter, Fighter) {
        let tuning = Tuning::default();
        (
            Fighter::spawn(Side::Red, &tuning),
            Fighter::spawn(Side::Blue, &tuning),
        )
    }

    #[test]
    fn test_punch_point_extends_forward() {
        let (red, _) = fighters();
        // center (214, 400), facing right, reach 66
        let fist = punch_point(&red);
        assert!((fist.x - 280.0).abs() < 1e-3);
        assert!((fist.y - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_hurtbox_points_follow_rotation() {
        let (mut red, _) = fighters();
        red.angle = 0.0;
        let points = hurtbox_points(&red);
        // angle 0: forward is up the screen, tail points down
        assert!((points[0].y - (400.0 - 30.0)).abs() < 1e-3);
        assert!((points[3].y - (400.0 + 44.0)).abs() < 1e-3);
        assert!((points[0].x - 214.0).abs() < 1e-3);
    }

    #[test]
    fn test_starting_positions_out_of_reach() {
        let (red, blue) = fighters();
        assert!(!punch_connects(&red, &blue));
        assert!(!punch_connects(&blue, &red));
    }

    #[test]
    fn test_face_to_face_hits_head_first() {
        let (red, mut blue) = fighters();
        // centers 120 apart: fist at 66, head at 120 - 30 = 90, gap 24 < 14 + 18
        blue.position.x = red.position.x + 120.0;
        assert_eq!(first_hurtbox_hit(&red, &blue), Some(0));
        assert_eq!(first_hurtbox_hit(&blue, &red), Some(0));
    }

    #[test]
    fn test_back_turned_hits_tail_region() {
        let (red, mut blue) = fighters();
        // blue faces away from red; its tail (offset 44) points at red
        blue.angle = 90.0;
        blue.position.x = red.position.x + 125.0;
        // fist at 66 from red center; tail at 125 - 44 = 81: gap 15 < 14 + 12
        assert_eq!(first_hurtbox_hit(&red, &blue), Some(3));
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let (mut red, mut blue) = fighters();
        red.punchbox = Circle::new(10.0, 0.0);
        red.angle = 0.0;
        blue.angle = 0.0;
        blue.hurtbox = [Circle::new(10.0, 0.0); 4];
        blue.position = red.position + Vec2::new(20.0, 0.0);
        assert!(!punch_connects(&red, &blue));
        blue.position = red.position + Vec2::new(15.0, 0.0);
        assert!(punch_connects(&red, &blue));
        blue.position = red.position + Vec2::new(25.0, 0.0);
        assert!(!punch_connects(&red, &blue));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: the outcome depends only on distance vs radius sum,
            /// so swapping roles on mirrored single-circle geometry agrees
            #[test]
            fn prop_symmetric_under_relabeling(
                dx in -60.0f32..60.0,
                dy in -60.0f32..60.0,
                r1 in 1.0f32..30.0,
                r2 in 1.0f32..30.0
            ) {
                let (mut red, mut blue) = fighters();
                red.punchbox = Circle::new(r1, 0.0);
                red.hurtbox = [Circle::new(r2, 0.0); 4];
                blue.punchbox = Circle::new(r1, 0.0);
                blue.hurtbox = [Circle::new(r2, 0.0); 4];
                blue.position = red.position + Vec2::new(dx, dy);

                let distance = Vec2::new(dx, dy).length();
                prop_assume!((distance - (r1 + r2)).abs() > 1e-2);
                let expected = distance < r1 + r2;
                prop_assert_eq!(punch_connects(&red, &blue), expected);
                prop_assert_eq!(punch_connects(&blue, &red), expected);
            }
        }
    }
}
