//! Error types for the timer widget

use thiserror::Error;

/// Lowest accepted countdown length in minutes
pub const MIN_MINUTES: i64 = 1;
/// Highest accepted countdown length in minutes
pub const MAX_MINUTES: i64 = 99;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimerError {
    #[error("time must be between 1 and 99 minutes, got {0}")]
    InvalidMinutes(i64),
    #[error("timer has no valid time set")]
    NotConfigured,
    #[error("a countdown is already running for this timer")]
    AlreadyRunning,
    #[error("countdown already finished, set a new time to restart")]
    Finished,
    #[error("timer state lock poisoned: {0}")]
    StatePoisoned(String),
}
