//! Fixed-timestep frame clock
//!
//! The host polls with its own millisecond clock as often as it likes; the
//! clock answers whether one simulated frame is due.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    period_ms: u64,
    last_frame_ms: u64,
}

impl FrameClock {
    /// Start the clock at the host's current time
    pub fn new(period_ms: u64, now_ms: u64) -> Self {
        Self {
            period_ms,
            last_frame_ms: now_ms,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Host time at which the most recent frame was accounted for
    pub fn last_frame_ms(&self) -> u64 {
        self.last_frame_ms
    }

    /// Whether a frame is due at `now_ms`.
    ///
    /// At most one frame per poll. The accumulator advances by one period
    /// rather than snapping to `now_ms`, so jitter does not drift the average
    /// rate; a host that polls too slowly falls behind instead of skipping.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        if now_ms.saturating_sub(self.last_frame_ms) >= self.period_ms {
            self.last_frame_ms += self.period_ms;
            true
        } else {
            false
        }
    }

    /// Frames owed but not yet simulated
    pub fn backlog(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.last_frame_ms) / self.period_ms.max(1)
    }
}
