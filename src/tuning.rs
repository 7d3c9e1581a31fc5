//! Data-driven game constants
//!
//! Defaults reproduce the fixed constants in [`crate::consts`]. A tuning file
//! may override any subset of fields; missing fields keep their defaults.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::state::{Circle, Ring, Side};

/// Starting pose for one fighter
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spawn {
    /// Top-left corner of the bounding box
    pub position: Vec2,
    /// Facing angle in degrees
    pub angle: f32,
}

impl Spawn {
    pub const fn new(x: f32, y: f32, angle: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            angle,
        }
    }
}

/// Every tunable number the simulation reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation period in milliseconds
    pub frame_rate_ms: u64,
    /// Gait flips on frames that are a multiple of this
    pub leg_move_rate_frames: u64,

    /// Per-frame translation step (pixels)
    pub move_step: f32,
    /// Per-frame rotation step (degrees)
    pub angle_step: f32,

    /// Neutral cooldown before a new punch may start
    pub btw_punches_frames: u32,
    pub windup_frames: u32,
    pub punch_frames: u32,
    /// Win screen display time
    pub game_over_frames: u32,

    pub ring: Ring,
    /// Sprite dimensions, shared by both fighters
    pub fighter_size: Vec2,
    pub red_start: Spawn,
    pub blue_start: Spawn,

    /// Vulnerable regions, in evaluation order
    pub hurtboxes: [Circle; 4],
    pub punchbox: Circle,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            frame_rate_ms: FRAME_RATE_IN_MS,
            leg_move_rate_frames: LEG_MOVE_RATE_IN_FRAMES,
            move_step: MOVE_STEP,
            angle_step: ANGLE_STEP,
            btw_punches_frames: BTW_PUNCHES_TIME_IN_FRAMES,
            windup_frames: WINDUP_TIME_IN_FRAMES,
            punch_frames: PUNCH_TIME_IN_FRAMES,
            game_over_frames: GAME_OVER_TIME_IN_FRAMES,
            ring: Ring::new(
                Vec2::splat(RING_START),
                Vec2::splat(RING_END),
            ),
            fighter_size: Vec2::new(FIGHTER_WIDTH, FIGHTER_HEIGHT),
            red_start: Spawn::new(RED_START.0, RED_START.1, RED_START.2),
            blue_start: Spawn::new(BLUE_START.0, BLUE_START.1, BLUE_START.2),
            hurtboxes: HURTBOXES.map(|(radius, offset)| Circle::new(radius, offset)),
            punchbox: Circle::new(PUNCHBOX.0, PUNCHBOX.1),
        }
    }
}

impl Tuning {
    /// Starting pose for a side
    pub fn spawn(&self, side: Side) -> Spawn {
        match side {
            Side::Red => self.red_start,
            Side::Blue => self.blue_start,
        }
    }

    /// Parse and validate tuning JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "tuning",
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a tuning file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frame_rate_ms == 0 {
            return Err(ConfigError::invalid("tuning", "frame_rate_ms must be positive"));
        }
        if self.leg_move_rate_frames == 0 {
            return Err(ConfigError::invalid(
                "tuning",
                "leg_move_rate_frames must be positive",
            ));
        }
        if !(self.move_step.is_finite() && self.move_step > 0.0) {
            return Err(ConfigError::invalid("tuning", "move_step must be positive"));
        }
        if !(self.angle_step.is_finite() && self.angle_step > 0.0) {
            return Err(ConfigError::invalid("tuning", "angle_step must be positive"));
        }

        let ring = &self.ring;
        if !(ring.min.is_finite() && ring.max.is_finite())
            || ring.min.x >= ring.max.x
            || ring.min.y >= ring.max.y
        {
            return Err(ConfigError::invalid(
                "tuning",
                format!("ring {:?}..{:?} is empty", ring.min, ring.max),
            ));
        }

        let size = self.fighter_size;
        if !(size.is_finite() && size.x > 0.0 && size.y > 0.0) {
            return Err(ConfigError::invalid("tuning", "fighter_size must be positive"));
        }
        if size.x >= ring.width() || size.y >= ring.height() {
            return Err(ConfigError::invalid(
                "tuning",
                format!("fighter {size:?} does not fit the ring"),
            ));
        }

        for side in Side::ALL {
            let spawn = self.spawn(side);
            if !spawn.angle.is_finite() || !ring.contains_box(spawn.position, size) {
                return Err(ConfigError::invalid(
                    "tuning",
                    format!("{side:?} spawn {:?} is outside the ring", spawn.position),
                ));
            }
        }

        for circle in self.hurtboxes.iter().chain(std::iter::once(&self.punchbox)) {
            if !(circle.radius.is_finite() && circle.radius > 0.0 && circle.offset.is_finite()) {
                return Err(ConfigError::invalid(
                    "tuning",
                    format!("circle {circle:?} needs a positive radius and finite offset"),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_constants() {
        let tuning = Tuning::default();
        assert_eq!(tuning.frame_rate_ms, 40);
        assert_eq!(tuning.move_step, 5.0);
        assert_eq!(tuning.angle_step, 2.0);
        assert_eq!(tuning.ring.min, Vec2::splat(50.0));
        assert_eq!(tuning.ring.max, Vec2::splat(750.0));
        assert_eq!(tuning.hurtboxes[1], Circle::new(22.0, -4.0));
        assert_eq!(tuning.punchbox, Circle::new(14.0, -66.0));
        assert!(tuning.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "move_step": 3.5, "punch_frames": 9 }"#).unwrap();
        assert_eq!(tuning.move_step, 3.5);
        assert_eq!(tuning.punch_frames, 9);
        assert_eq!(tuning.windup_frames, WINDUP_TIME_IN_FRAMES);
        assert_eq!(tuning.red_start, Spawn::new(150.0, 336.0, 90.0));
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        let err = Tuning::from_json(r#"{ "frame_rate_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_spawn_outside_ring() {
        let err = Tuning::from_json(
            r#"{ "blue_start": { "position": [700.0, 336.0], "angle": -90.0 } }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Blue"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Tuning::from_json("{ move_step: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { what: "tuning", .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "game_over_frames": 10 }}"#).unwrap();
        let tuning = Tuning::load(file.path()).unwrap();
        assert_eq!(tuning.game_over_frames, 10);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let err = Tuning::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }
}
