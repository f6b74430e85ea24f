//! Score-driven difficulty ramp
//!
//! Speed and gap size move in discrete steps every `DIFF_EVERY` points, each
//! clamped to its ceiling/floor. Pure function of the current values - no
//! hidden history.

use crate::consts::*;

/// Current pipe scroll speed and gap height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Horizontal pipe speed in px/tick (non-decreasing)
    pub speed: f32,
    /// Vertical gap height in px (non-increasing)
    pub gap: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            speed: PIPE_SPEED_START,
            gap: GAP_START,
        }
    }
}

impl Difficulty {
    /// Apply one difficulty step if `score` sits on a step boundary
    ///
    /// A no-op unless `score > 0 && score % DIFF_EVERY == 0`. Speed ramps up
    /// toward `PIPE_SPEED_MAX`, the gap shrinks toward `GAP_MIN`.
    pub fn step(self, score: u32) -> Self {
        if score == 0 || !score.is_multiple_of(DIFF_EVERY) {
            return self;
        }
        Self {
            speed: (self.speed + DIFF_SPEED_STEP).min(PIPE_SPEED_MAX),
            gap: (self.gap - DIFF_GAP_STEP).max(GAP_MIN),
        }
    }
}
