//! Scripted key timelines for headless runs
//!
//! A script stands in for a keyboard: key events stamped with the host time
//! they arrive at. The runner walks a virtual clock in host-frame steps,
//! delivering due events and polling the session exactly like a live
//! frontend would.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::platform::input::KeyEvent;
use crate::renderer::MatchView;
use crate::session::{Control, Session};
use crate::sim::{MatchEvent, Side};

/// Run time after the last event when a script gives no duration
const DEFAULT_TAIL_MS: u64 = 1000;

/// A key event delivered at a fixed host time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedKey {
    pub at_ms: u64,
    #[serde(flatten)]
    pub event: KeyEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Script {
    /// Total host time to run; defaults to one second past the last event
    #[serde(default)]
    pub duration_ms: Option<u64>,
    #[serde(default)]
    pub events: Vec<TimedKey>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut script: Self = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            what: "script",
            source,
        })?;
        // stable: same-time events keep file order
        script.events.sort_by_key(|e| e.at_ms);
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let script = Self::from_json(&json)?;
        log::info!("Loaded {} scripted key events", script.events.len());
        Ok(script)
    }

    /// Host time at which the run stops
    pub fn end_ms(&self) -> u64 {
        self.duration_ms.unwrap_or_else(|| {
            self.events.last().map_or(0, |e| e.at_ms) + DEFAULT_TAIL_MS
        })
    }
}

/// What happened over a scripted run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub frames: u64,
    pub hits: u64,
    /// Winners in the order the rounds ended
    pub knockouts: Vec<Side>,
    pub resets: u64,
    /// Host time of the quit key, if the script pressed it
    pub quit_at_ms: Option<u64>,
    pub final_view: MatchView,
}

/// Drive `session` through `script`, stepping host time by `host_frame_ms`.
///
/// The session should be anchored at host time 0.
pub fn run(session: &mut Session, script: &Script, host_frame_ms: u64) -> RunSummary {
    let step = host_frame_ms.max(1);
    let end = script.end_ms();
    let mut pending = script.events.iter().peekable();
    let mut summary = RunSummary {
        frames: 0,
        hits: 0,
        knockouts: Vec::new(),
        resets: 0,
        quit_at_ms: None,
        final_view: session.view(),
    };

    let mut now = 0;
    'host: while now <= end {
        while let Some(timed) = pending.next_if(|e| e.at_ms <= now) {
            if session.handle_key(timed.event) == Control::Quit {
                summary.quit_at_ms = Some(timed.at_ms);
                break 'host;
            }
        }

        if let Some(events) = session.advance(now) {
            summary.frames += 1;
            for event in events {
                match event {
                    MatchEvent::PunchLanded { .. } => summary.hits += 1,
                    MatchEvent::Knockout { winner } => summary.knockouts.push(winner),
                    MatchEvent::MatchReset => summary.resets += 1,
                    _ => {}
                }
            }
        }

        now += step;
    }

    summary.final_view = session.view();
    log::info!(
        "Run finished: {} frames, {} hits, {} knockouts",
        summary.frames,
        summary.hits,
        summary.knockouts.len()
    );
    summary
}
