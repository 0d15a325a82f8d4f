//! Countdown state and tick logic

use serde::{Deserialize, Serialize};

use super::Digits;
use crate::error::{TimerError, MAX_MINUTES, MIN_MINUTES};

/// Result of applying one tick to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Remaining time went down by one second
    Decremented,
    /// Remaining time was already zero; the finished flag was just set
    Finished,
    /// Timer had already finished or was never configured
    Idle,
}

/// Remaining seconds plus the completion flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    pub remaining_seconds: u32,
    pub finished: bool,
    pub configured: bool,
}

impl TimerState {
    /// Create an unconfigured timer at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the countdown length, leaving the state untouched on invalid input
    pub fn set_time(&mut self, minutes: i64) -> Result<(), TimerError> {
        if !(MIN_MINUTES..=MAX_MINUTES).contains(&minutes) {
            return Err(TimerError::InvalidMinutes(minutes));
        }

        self.remaining_seconds = (minutes * 60) as u32;
        self.finished = false;
        self.configured = true;
        Ok(())
    }

    /// Apply one tick of the countdown
    pub fn tick(&mut self) -> TickOutcome {
        if !self.configured || self.finished {
            return TickOutcome::Idle;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
            TickOutcome::Decremented
        } else {
            self.finished = true;
            TickOutcome::Finished
        }
    }

    pub fn digits(&self) -> Digits {
        Digits::from_remaining(self.remaining_seconds)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
