//! Fixed timestep simulation tick
//!
//! Match controller: advances the whole match by exactly one frame.

use serde::{Deserialize, Serialize};

use super::movement;
use super::punch;
use super::state::{MatchEvent, MatchState, Side};
use crate::tuning::Tuning;

/// What happens to the rest of a frame once a knockout lands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KnockoutTiming {
    /// Later fighters still move and punch this frame; the win screen starts
    /// on the next frame. The final rendered pose includes that last update.
    #[default]
    NextFrame,
    /// Stop updating fighters the moment the knockout lands
    Immediate,
}

/// Advance the match by one simulated frame
pub fn tick(state: &mut MatchState, tuning: &Tuning, timing: KnockoutTiming) -> Vec<MatchEvent> {
    let mut events = Vec::new();
    state.frame_count += 1;

    if state.game_over {
        state.time_in_game_over += 1;
        if state.time_in_game_over > tuning.game_over_frames {
            state.reset(tuning);
            log::info!("Match reset after {} frames", state.frame_count);
            events.push(MatchEvent::MatchReset);
        }
        return events;
    }

    for side in Side::ALL {
        // Decided earlier this frame: freeze, or keep animating without scoring
        if state.game_over && timing == KnockoutTiming::Immediate {
            break;
        }
        let resolve_hits = !state.game_over;
        let frame_count = state.frame_count;

        let (attacker, defender) = state.pair_mut(side);
        movement::integrate(attacker, tuning, frame_count);
        if punch::step(attacker, defender, tuning, resolve_hits, &mut events) {
            log::info!("{} wins by knockout", side.as_str());
            state.game_over = true;
        }
    }

    events
}
