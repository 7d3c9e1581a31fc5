//! Keyboard input mapping
//!
//! Translates raw key events into per-fighter button state. The default mode
//! flips a button on every non-repeat key-down and again on every key-up, so
//! a quick tap leaves it where it was and a stray unmatched event latches it.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::sim::state::{Button, MatchState, Side};

/// Symbolic keyboard keys the host can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyAction {
    Down,
    Up,
}

/// A raw key transition from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: Key,
    pub action: KeyAction,
    /// Auto-repeat key-down generated while the key is held
    #[serde(default)]
    pub repeat: bool,
}

impl KeyEvent {
    pub fn down(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Down,
            repeat: false,
        }
    }

    pub fn up(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Up,
            repeat: false,
        }
    }

    pub fn repeat(key: Key) -> Self {
        Self {
            key,
            action: KeyAction::Down,
            repeat: true,
        }
    }
}

/// How key events drive button state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Flip on every non-repeat key-down and every key-up
    #[default]
    Toggle,
    /// Set on key-down, clear on key-up
    Held,
}

/// One key bound to one fighter's button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub key: Key,
    pub side: Side,
    pub button: Button,
}

/// Key-to-button table for both fighters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub bindings: Vec<Binding>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Button::*;
        let red = [
            (Key::W, Up),
            (Key::A, Left),
            (Key::S, Down),
            (Key::D, Right),
            (Key::Q, RotateCcw),
            (Key::E, RotateCw),
            (Key::C, StartPunch),
        ];
        let blue = [
            (Key::I, Up),
            (Key::J, Left),
            (Key::K, Down),
            (Key::L, Right),
            (Key::U, RotateCcw),
            (Key::O, RotateCw),
            (Key::N, StartPunch),
        ];

        let bindings = red
            .into_iter()
            .map(|(key, button)| Binding {
                key,
                side: Side::Red,
                button,
            })
            .chain(blue.into_iter().map(|(key, button)| Binding {
                key,
                side: Side::Blue,
                button,
            }))
            .collect();
        Self { bindings }
    }
}

impl KeyBindings {
    /// Fighter and button a key controls
    pub fn lookup(&self, key: Key) -> Option<(Side, Button)> {
        self.bindings
            .iter()
            .find(|b| b.key == key)
            .map(|b| (b.side, b.button))
    }

    /// Each key maps to at most one button, and `Escape` stays free for quit
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, binding) in self.bindings.iter().enumerate() {
            if binding.key == Key::Escape {
                return Err(ConfigError::invalid("bindings", "Escape is reserved for quit"));
            }
            if self.bindings[..i].iter().any(|b| b.key == binding.key) {
                return Err(ConfigError::invalid(
                    "bindings",
                    format!("{:?} is bound more than once", binding.key),
                ));
            }
        }
        Ok(())
    }
}

/// Result of feeding one key event through the mapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Host should shut down
    Quit,
    /// A fighter's button changed to `pressed`
    Changed {
        side: Side,
        button: Button,
        pressed: bool,
    },
    /// Unbound key, or a repeat the mode ignores
    Ignored,
}

/// Applies key events to the match's button state
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    pub mode: InputMode,
    pub bindings: KeyBindings,
}

impl InputMapper {
    pub fn new(mode: InputMode, bindings: KeyBindings) -> Self {
        Self { mode, bindings }
    }

    pub fn apply(&self, event: KeyEvent, state: &mut MatchState) -> InputOutcome {
        if event.key == Key::Escape && event.action == KeyAction::Down {
            return InputOutcome::Quit;
        }

        let Some((side, button)) = self.bindings.lookup(event.key) else {
            log::trace!("Unbound key {:?}", event.key);
            return InputOutcome::Ignored;
        };

        let buttons = &mut state.fighter_mut(side).buttons;
        match (self.mode, event.action) {
            (_, KeyAction::Down) if event.repeat => return InputOutcome::Ignored,
            (InputMode::Toggle, _) => buttons.toggle(button),
            (InputMode::Held, KeyAction::Down) => buttons.set(button, true),
            (InputMode::Held, KeyAction::Up) => buttons.set(button, false),
        }

        InputOutcome::Changed {
            side,
            button,
            pressed: buttons.get(button),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn setup(mode: InputMode) -> (InputMapper, MatchState) {
        (
            InputMapper::new(mode, KeyBindings::default()),
            MatchState::new(&Tuning::default()),
        )
    }

    #[test]
    fn test_default_bindings_are_valid() {
        let bindings = KeyBindings::default();
        assert!(bindings.validate().is_ok());
        assert_eq!(bindings.lookup(Key::C), Some((Side::Red, Button::StartPunch)));
        assert_eq!(bindings.lookup(Key::L), Some((Side::Blue, Button::Right)));
        assert_eq!(bindings.lookup(Key::Z), None);
    }

    #[test]
    fn test_toggle_flips_on_down_and_up() {
        let (mapper, mut state) = setup(InputMode::Toggle);

        mapper.apply(KeyEvent::down(Key::W), &mut state);
        assert!(state.fighter(Side::Red).buttons.up);

        // repeats are ignored
        let outcome = mapper.apply(KeyEvent::repeat(Key::W), &mut state);
        assert_eq!(outcome, InputOutcome::Ignored);
        assert!(state.fighter(Side::Red).buttons.up);

        // release flips it back
        mapper.apply(KeyEvent::up(Key::W), &mut state);
        assert!(!state.fighter(Side::Red).buttons.up);
    }

    #[test]
    fn test_toggle_unmatched_release_latches() {
        let (mapper, mut state) = setup(InputMode::Toggle);
        // key-up without a prior key-down (e.g. pressed before focus)
        let outcome = mapper.apply(KeyEvent::up(Key::N), &mut state);
        assert_eq!(
            outcome,
            InputOutcome::Changed {
                side: Side::Blue,
                button: Button::StartPunch,
                pressed: true
            }
        );
        mapper.apply(KeyEvent::down(Key::N), &mut state);
        assert!(!state.fighter(Side::Blue).buttons.start_punch);
    }

    #[test]
    fn test_held_mode_tracks_key() {
        let (mapper, mut state) = setup(InputMode::Held);
        mapper.apply(KeyEvent::down(Key::E), &mut state);
        mapper.apply(KeyEvent::down(Key::E), &mut state);
        assert!(state.fighter(Side::Red).buttons.rotate_cw);
        mapper.apply(KeyEvent::up(Key::E), &mut state);
        assert!(!state.fighter(Side::Red).buttons.rotate_cw);
        mapper.apply(KeyEvent::up(Key::E), &mut state);
        assert!(!state.fighter(Side::Red).buttons.rotate_cw);
    }

    #[test]
    fn test_escape_quits() {
        let (mapper, mut state) = setup(InputMode::Toggle);
        assert_eq!(
            mapper.apply(KeyEvent::down(Key::Escape), &mut state),
            InputOutcome::Quit
        );
        assert_eq!(
            mapper.apply(KeyEvent::up(Key::Escape), &mut state),
            InputOutcome::Ignored
        );
    }

    #[test]
    fn test_duplicate_binding_rejected() {
        let mut bindings = KeyBindings::default();
        bindings.bindings.push(Binding {
            key: Key::W,
            side: Side::Blue,
            button: Button::Up,
        });
        assert!(bindings.validate().is_err());
    }

    #[test]
    fn test_key_event_json_shape() {
        let event: KeyEvent = serde_json::from_str(r#"{ "key": "C", "action": "down" }"#).unwrap();
        assert_eq!(event, KeyEvent::down(Key::C));
    }
}
