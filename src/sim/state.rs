//! Match state and core simulation types
//!
//! Everything the per-frame update reads or writes lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Which corner a fighter belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    /// Update order within a frame
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];

    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Slot in [`MatchState::fighters`]
    pub fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Blue => "blue",
        }
    }
}

/// Attack phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PunchState {
    #[default]
    Neutral,
    Windup,
    Punch,
}

impl PunchState {
    /// Row in the sprite-frame table (see `renderer::SpriteFrame`)
    pub fn ordinal(self) -> u32 {
        match self {
            PunchState::Neutral => 0,
            PunchState::Windup => 1,
            PunchState::Punch => 2,
        }
    }
}

/// Three-stage health
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum HeartState {
    #[default]
    Full,
    Half,
    Empty,
}

impl HeartState {
    /// One step toward `Empty`; `Empty` stays `Empty`
    pub fn advance(self) -> Self {
        match self {
            HeartState::Full => HeartState::Half,
            HeartState::Half | HeartState::Empty => HeartState::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == HeartState::Empty
    }
}

/// Symbolic per-fighter controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Left,
    Down,
    Right,
    RotateCcw,
    RotateCw,
    StartPunch,
}

impl Button {
    pub const ALL: [Button; 7] = [
        Button::Up,
        Button::Left,
        Button::Down,
        Button::Right,
        Button::RotateCcw,
        Button::RotateCw,
        Button::StartPunch,
    ];
}

/// Persistent button state for one fighter.
///
/// Whether a flag means "toggled on" or "held" is up to the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonState {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
    pub rotate_ccw: bool,
    pub rotate_cw: bool,
    pub start_punch: bool,
}

impl ButtonState {
    fn slot_mut(&mut self, button: Button) -> &mut bool {
        match button {
            Button::Up => &mut self.up,
            Button::Left => &mut self.left,
            Button::Down => &mut self.down,
            Button::Right => &mut self.right,
            Button::RotateCcw => &mut self.rotate_ccw,
            Button::RotateCw => &mut self.rotate_cw,
            Button::StartPunch => &mut self.start_punch,
        }
    }

    pub fn get(&self, button: Button) -> bool {
        match button {
            Button::Up => self.up,
            Button::Left => self.left,
            Button::Down => self.down,
            Button::Right => self.right,
            Button::RotateCcw => self.rotate_ccw,
            Button::RotateCw => self.rotate_cw,
            Button::StartPunch => self.start_punch,
        }
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        *self.slot_mut(button) = pressed;
    }

    pub fn toggle(&mut self, button: Button) {
        let slot = self.slot_mut(button);
        *slot = !*slot;
    }

    /// Builder-style helper, mostly for tests and scripted input
    pub fn with(mut self, button: Button) -> Self {
        self.set(button, true);
        self
    }

    pub fn any(&self) -> bool {
        Button::ALL.iter().any(|&b| self.get(b))
    }
}

/// A circle fixed to a fighter's body, positioned along its facing axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f32,
    /// Distance from the body center along the facing axis (negative = forward)
    pub offset: f32,
}

impl Circle {
    pub const fn new(radius: f32, offset: f32) -> Self {
        Self { radius, offset }
    }
}

/// Axis-aligned ring rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub min: Vec2,
    pub max: Vec2,
}

impl Ring {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Whether a box anchored at `top_left` lies inside the ring (edges inclusive)
    pub fn contains_box(&self, top_left: Vec2, size: Vec2) -> bool {
        top_left.x >= self.min.x
            && top_left.y >= self.min.y
            && top_left.x + size.x <= self.max.x
            && top_left.y + size.y <= self.max.y
    }
}

/// Something noteworthy that happened during a frame (for logs, audio cues, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Cooldown elapsed with the punch button set
    WindupStarted { side: Side },
    /// Windup finished; the fist is out
    PunchThrown { side: Side },
    /// Fist overlapped one of the defender's hurtboxes
    PunchLanded {
        attacker: Side,
        hurtbox: usize,
        heart: HeartState,
    },
    /// Defender's heart reached `Empty`
    Knockout { winner: Side },
    /// Punch phase over, back to neutral
    Recovered { side: Side },
    /// Win screen elapsed, fighters back in their corners
    MatchReset,
}

/// One lobster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub side: Side,
    /// Top-left of the bounding box
    pub position: Vec2,
    pub size: Vec2,
    /// Degrees, never normalized
    pub angle: f32,
    /// Rotation pivot relative to `position`
    pub center: Vec2,
    pub punch_state: PunchState,
    pub time_in_state: u32,
    pub last_punch_was_left: bool,
    pub hit_landed_this_punch: bool,
    pub legs_extended: bool,
    pub buttons: ButtonState,
    pub hurtbox: [Circle; 4],
    pub punchbox: Circle,
    pub heart: HeartState,
    pub won: bool,
}

impl Fighter {
    /// Create a fighter in its starting pose
    pub fn spawn(side: Side, tuning: &Tuning) -> Self {
        let start = tuning.spawn(side);
        Self {
            side,
            position: start.position,
            size: tuning.fighter_size,
            angle: start.angle,
            center: tuning.fighter_size / 2.0,
            punch_state: PunchState::Neutral,
            time_in_state: 0,
            last_punch_was_left: true,
            hit_landed_this_punch: false,
            legs_extended: true,
            buttons: ButtonState::default(),
            hurtbox: tuning.hurtboxes,
            punchbox: tuning.punchbox,
            heart: HeartState::Full,
            won: false,
        }
    }

    /// Restore the starting pose and clear combat/health state.
    ///
    /// Button state belongs to the input layer and is left alone.
    pub fn reset(&mut self, tuning: &Tuning) {
        let buttons = self.buttons;
        *self = Self::spawn(self.side, tuning);
        self.buttons = buttons;
    }

    /// Rotation pivot in ring coordinates
    pub fn world_center(&self) -> Vec2 {
        self.position + self.center
    }

    /// Move to a new punch state, restarting the phase timer
    pub(crate) fn enter(&mut self, state: PunchState) {
        self.punch_state = state;
        self.time_in_state = 0;
    }
}

/// The single match: two fighters plus win-screen bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Indexed by [`Side::index`]
    pub fighters: [Fighter; 2],
    pub game_over: bool,
    pub time_in_game_over: u32,
    /// Simulated frames since startup; drives the shared gait cadence
    pub frame_count: u64,
}

impl MatchState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            fighters: Side::ALL.map(|side| Fighter::spawn(side, tuning)),
            game_over: false,
            time_in_game_over: 0,
            frame_count: 0,
        }
    }

    pub fn fighter(&self, side: Side) -> &Fighter {
        &self.fighters[side.index()]
    }

    pub fn fighter_mut(&mut self, side: Side) -> &mut Fighter {
        &mut self.fighters[side.index()]
    }

    /// Mutable access to a fighter and its opponent at the same time
    pub fn pair_mut(&mut self, side: Side) -> (&mut Fighter, &mut Fighter) {
        let [red, blue] = &mut self.fighters;
        match side {
            Side::Red => (red, blue),
            Side::Blue => (blue, red),
        }
    }

    /// Side whose `won` flag is set, if any
    pub fn winner(&self) -> Option<Side> {
        self.fighters.iter().find(|f| f.won).map(|f| f.side)
    }

    /// Back to the opening pose; the frame counter keeps running
    pub fn reset(&mut self, tuning: &Tuning) {
        for fighter in &mut self.fighters {
            fighter.reset(tuning);
        }
        self.game_over = false;
        self.time_in_game_over = 0;
    }
}
