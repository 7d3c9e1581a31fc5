//! Game settings and preferences
//!
//! Persisted as JSON next to the binary, separate from tuning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::platform::input::KeyBindings;

pub use crate::platform::input::InputMode;
pub use crate::sim::KnockoutTiming;

/// Player-facing options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Toggle (flip on press and release) or held buttons
    pub input_mode: InputMode,
    /// Whether the losing fighter finishes the knockout frame
    pub knockout_timing: KnockoutTiming,
    pub bindings: KeyBindings,
}

impl Settings {
    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "settings",
            source,
        })?;
        settings.bindings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} ({:?} input, {:?} knockout)",
            path.display(),
            settings.input_mode,
            settings.knockout_timing
        );
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!("Using default settings");
            Ok(Self::default())
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| ConfigError::Parse {
            what: "settings",
            source,
        })?;
        std::fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
