//! A running game: match state plus the input and clock plumbing around it
//!
//! A frontend calls [`Session::handle_key`] for every key event and
//! [`Session::advance`] once per host frame, then draws [`Session::view`].

use crate::platform::clock::FrameClock;
use crate::platform::input::{InputMapper, InputOutcome, KeyEvent};
use crate::renderer::{MatchView, SpriteInstance};
use crate::settings::Settings;
use crate::sim::{KnockoutTiming, MatchEvent, MatchState, Side, tick};
use crate::tuning::Tuning;

/// Whether the host should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Session {
    state: MatchState,
    tuning: Tuning,
    mapper: InputMapper,
    knockout_timing: KnockoutTiming,
    clock: FrameClock,
    quit: bool,
}

impl Session {
    /// Start a match with the clock anchored at `now_ms`
    pub fn new(tuning: Tuning, settings: &Settings, now_ms: u64) -> Self {
        let state = MatchState::new(&tuning);
        let clock = FrameClock::new(tuning.frame_rate_ms, now_ms);
        log::info!(
            "Session started: {} ms frames, {:?} input",
            tuning.frame_rate_ms,
            settings.input_mode
        );
        Self {
            state,
            tuning,
            mapper: InputMapper::new(settings.input_mode, settings.bindings.clone()),
            knockout_timing: settings.knockout_timing,
            clock,
            quit: false,
        }
    }

    /// Feed one key event from the host
    pub fn handle_key(&mut self, event: KeyEvent) -> Control {
        match self.mapper.apply(event, &mut self.state) {
            InputOutcome::Quit => {
                log::info!("Quit requested");
                self.quit = true;
                Control::Quit
            }
            InputOutcome::Changed {
                side,
                button,
                pressed,
            } => {
                log::trace!("{} {:?} -> {}", side.as_str(), button, pressed);
                Control::Continue
            }
            InputOutcome::Ignored => Control::Continue,
        }
    }

    /// Simulate at most one frame if one is due at `now_ms`
    pub fn advance(&mut self, now_ms: u64) -> Option<Vec<MatchEvent>> {
        if self.quit || !self.clock.poll(now_ms) {
            return None;
        }
        Some(tick(&mut self.state, &self.tuning, self.knockout_timing))
    }

    pub fn is_quit(&self) -> bool {
        self.quit
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn view(&self) -> MatchView {
        MatchView::of(&self.state)
    }

    /// Instance buffer contents, red first
    pub fn instances(&self) -> [SpriteInstance; 2] {
        let view = self.view();
        Side::ALL.map(|side| SpriteInstance::from_view(view.fighter(side)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::Key;

    #[test]
    fn test_advance_respects_clock() {
        let mut session = Session::new(Tuning::default(), &Settings::default(), 0);
        assert!(session.advance(39).is_none());
        assert!(session.advance(40).is_some());
        assert!(session.advance(60).is_none());
        assert_eq!(session.state().frame_count, 1);
    }

    #[test]
    fn test_keys_reach_fighters() {
        let mut session = Session::new(Tuning::default(), &Settings::default(), 0);
        assert_eq!(session.handle_key(KeyEvent::down(Key::D)), Control::Continue);
        session.advance(40);
        assert_eq!(session.state().fighter(Side::Red).position.x, 155.0);
    }

    #[test]
    fn test_quit_stops_simulation() {
        let mut session = Session::new(Tuning::default(), &Settings::default(), 0);
        assert_eq!(session.handle_key(KeyEvent::down(Key::Escape)), Control::Quit);
        assert!(session.is_quit());
        assert!(session.advance(1000).is_none());
    }

    #[test]
    fn test_instances_follow_view() {
        let session = Session::new(Tuning::default(), &Settings::default(), 0);
        let [red, blue] = session.instances();
        assert_eq!(red.position, [150.0, 336.0]);
        assert_eq!(blue.position, [522.0, 336.0]);
        assert_eq!(red.layer, 1);
    }
}
