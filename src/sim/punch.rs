//! Punch state machine
//!
//! ```text
//! Neutral --(cooldown elapsed && punch set)--> Windup
//! Windup  --(windup elapsed)-----------------> Punch
//! Punch   --(punch elapsed)------------------> Neutral
//! ```
//!
//! While in `Punch` the collision check runs every frame until it lands once,
//! so a fast-closing opponent cannot slip between two sampled instants.

use super::collision::first_hurtbox_hit;
use super::state::{Fighter, MatchEvent, PunchState};
use crate::tuning::Tuning;

/// Advance the attacker's punch machine by one frame.
///
/// `resolve_hits` is false once the match has already been decided this
/// frame; the machine still runs but can no longer damage the defender.
/// Returns true when this frame's hit emptied the defender's heart.
pub fn step(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    tuning: &Tuning,
    resolve_hits: bool,
    events: &mut Vec<MatchEvent>,
) -> bool {
    attacker.time_in_state += 1;
    let mut knockout = false;

    match attacker.punch_state {
        PunchState::Neutral => {
            if attacker.time_in_state > tuning.btw_punches_frames && attacker.buttons.start_punch {
                attacker.enter(PunchState::Windup);
                log::debug!("{} winds up", attacker.side.as_str());
                events.push(MatchEvent::WindupStarted {
                    side: attacker.side,
                });
            }
        }

        PunchState::Windup => {
            if attacker.time_in_state > tuning.windup_frames {
                attacker.enter(PunchState::Punch);
                events.push(MatchEvent::PunchThrown {
                    side: attacker.side,
                });
            }
        }

        PunchState::Punch => {
            if resolve_hits && !attacker.hit_landed_this_punch {
                if let Some(hurtbox) = first_hurtbox_hit(attacker, defender) {
                    attacker.hit_landed_this_punch = true;
                    defender.heart = defender.heart.advance();
                    log::debug!(
                        "{} lands on {} hurtbox {} ({:?})",
                        attacker.side.as_str(),
                        defender.side.as_str(),
                        hurtbox,
                        defender.heart
                    );
                    events.push(MatchEvent::PunchLanded {
                        attacker: attacker.side,
                        hurtbox,
                        heart: defender.heart,
                    });

                    if defender.heart.is_empty() {
                        attacker.won = true;
                        knockout = true;
                        events.push(MatchEvent::Knockout {
                            winner: attacker.side,
                        });
                    }
                }
            }

            if attacker.time_in_state > tuning.punch_frames {
                attacker.enter(PunchState::Neutral);
                attacker.last_punch_was_left = !attacker.last_punch_was_left;
                attacker.hit_landed_this_punch = false;
                events.push(MatchEvent::Recovered {
                    side: attacker.side,
                });
            }
        }
    }

    knockout
}
