//! What the presentation layer needs to draw a frame
//!
//! Views are plain values derived from [`MatchState`]; the renderer never
//! reaches into simulation state directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::state::{Fighter, HeartState, MatchState, PunchState, Side};

/// The six lobster poses, one texture each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteFrame {
    NeutralIn,
    NeutralOut,
    WindupIn,
    WindupOut,
    PunchIn,
    PunchOut,
}

impl SpriteFrame {
    /// All frames, ordered by [`SpriteFrame::selector`]
    pub const ALL: [SpriteFrame; 6] = [
        SpriteFrame::NeutralIn,
        SpriteFrame::NeutralOut,
        SpriteFrame::WindupIn,
        SpriteFrame::WindupOut,
        SpriteFrame::PunchIn,
        SpriteFrame::PunchOut,
    ];

    /// Pose for a punch phase and gait
    pub fn for_pose(punch: PunchState, legs_extended: bool) -> Self {
        match (punch, legs_extended) {
            (PunchState::Neutral, false) => SpriteFrame::NeutralIn,
            (PunchState::Neutral, true) => SpriteFrame::NeutralOut,
            (PunchState::Windup, false) => SpriteFrame::WindupIn,
            (PunchState::Windup, true) => SpriteFrame::WindupOut,
            (PunchState::Punch, false) => SpriteFrame::PunchIn,
            (PunchState::Punch, true) => SpriteFrame::PunchOut,
        }
    }

    /// Texture slot: `2 * punch ordinal + (legs out ? 1 : 0)`
    pub fn selector(self) -> u32 {
        match self {
            SpriteFrame::NeutralIn => 0,
            SpriteFrame::NeutralOut => 1,
            SpriteFrame::WindupIn => 2,
            SpriteFrame::WindupOut => 3,
            SpriteFrame::PunchIn => 4,
            SpriteFrame::PunchOut => 5,
        }
    }

    /// Asset name, without extension
    pub fn texture_name(self) -> &'static str {
        match self {
            SpriteFrame::NeutralIn => "neutral_in",
            SpriteFrame::NeutralOut => "neutral_out",
            SpriteFrame::WindupIn => "windup_in",
            SpriteFrame::WindupOut => "windup_out",
            SpriteFrame::PunchIn => "punch_in",
            SpriteFrame::PunchOut => "punch_out",
        }
    }
}

/// Everything needed to draw one lobster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FighterView {
    pub side: Side,
    /// Top-left of the destination rectangle
    pub position: Vec2,
    pub size: Vec2,
    /// Degrees, clockwise
    pub angle: f32,
    /// Rotation pivot relative to `position`
    pub pivot: Vec2,
    pub frame: SpriteFrame,
    /// Flip horizontally (right-hand punch)
    pub mirrored: bool,
    pub heart: HeartState,
}

impl FighterView {
    pub fn of(fighter: &Fighter) -> Self {
        Self {
            side: fighter.side,
            position: fighter.position,
            size: fighter.size,
            angle: fighter.angle,
            pivot: fighter.center,
            frame: SpriteFrame::for_pose(fighter.punch_state, fighter.legs_extended),
            mirrored: fighter.punch_state != PunchState::Neutral && !fighter.last_punch_was_left,
            heart: fighter.heart,
        }
    }
}

/// Which win screen to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinScreen {
    RedWins,
    BlueWins,
}

impl WinScreen {
    pub fn for_winner(side: Side) -> Self {
        match side {
            Side::Red => WinScreen::RedWins,
            Side::Blue => WinScreen::BlueWins,
        }
    }

    pub fn texture_name(self) -> &'static str {
        match self {
            WinScreen::RedWins => "red_wins",
            WinScreen::BlueWins => "blue_wins",
        }
    }
}

/// One frame's worth of render input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchView {
    /// Red first, then blue
    pub fighters: [FighterView; 2],
    pub game_over: bool,
    /// Set while the win screen is showing
    pub win_screen: Option<WinScreen>,
    pub frame_count: u64,
}

impl MatchView {
    pub fn of(state: &MatchState) -> Self {
        let win_screen = if state.game_over {
            state.winner().map(WinScreen::for_winner)
        } else {
            None
        };
        Self {
            fighters: Side::ALL.map(|side| FighterView::of(state.fighter(side))),
            game_over: state.game_over,
            win_screen,
            frame_count: state.frame_count,
        }
    }

    pub fn fighter(&self, side: Side) -> &FighterView {
        &self.fighters[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_selector_matches_formula() {
        for punch in [PunchState::Neutral, PunchState::Windup, PunchState::Punch] {
            for legs in [false, true] {
                let frame = SpriteFrame::for_pose(punch, legs);
                assert_eq!(frame.selector(), 2 * punch.ordinal() + u32::from(legs));
            }
        }
    }

    #[test]
    fn test_all_is_in_selector_order() {
        for (i, frame) in SpriteFrame::ALL.iter().enumerate() {
            assert_eq!(frame.selector() as usize, i);
        }
        assert_eq!(SpriteFrame::ALL[3].texture_name(), "windup_out");
    }

    #[test]
    fn test_mirror_only_on_right_hand_attack() {
        let tuning = Tuning::default();
        let mut fighter = Fighter::spawn(Side::Red, &tuning);
        assert!(!FighterView::of(&fighter).mirrored);

        fighter.last_punch_was_left = false;
        assert!(!FighterView::of(&fighter).mirrored);

        fighter.punch_state = PunchState::Windup;
        assert!(FighterView::of(&fighter).mirrored);

        fighter.last_punch_was_left = true;
        assert!(!FighterView::of(&fighter).mirrored);
    }

    #[test]
    fn test_starting_view() {
        let state = MatchState::new(&Tuning::default());
        let view = MatchView::of(&state);
        let red = view.fighter(Side::Red);
        assert_eq!(red.frame, SpriteFrame::NeutralOut);
        assert_eq!(red.pivot, Vec2::new(64.0, 64.0));
        assert_eq!(red.heart, HeartState::Full);
        assert!(!view.game_over);
        assert_eq!(view.win_screen, None);
    }

    #[test]
    fn test_win_screen_follows_winner() {
        let mut state = MatchState::new(&Tuning::default());
        state.fighter_mut(Side::Blue).won = true;
        state.fighter_mut(Side::Red).heart = HeartState::Empty;
        state.game_over = true;
        let view = MatchView::of(&state);
        assert_eq!(view.win_screen, Some(WinScreen::BlueWins));
        assert_eq!(view.fighter(Side::Red).heart, HeartState::Empty);
    }
}
