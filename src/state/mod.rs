//! State management module
//!
//! Countdown state, its MM:SS digits, and the widget that owns both.

pub mod digits;
pub mod timer_state;
pub mod widget;

// Re-export main types
pub use digits::Digits;
pub use timer_state::{TickOutcome, TimerState};
pub use widget::{TimerSnapshot, TimerWidget};
