//! Countdown Timer - a minimal MM:SS countdown shown in a small native window
//!
//! The widget holds the remaining seconds and a finished flag, splits the
//! remaining time into four display digits, and ticks once per second on a
//! tokio interval until it reaches zero. An eframe window draws the digits
//! and repaints whenever the widget publishes a change.

pub mod config;
pub mod error;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::TimerError;
pub use state::{Digits, TimerSnapshot, TimerWidget};
pub use tasks::{CountdownEnd, CountdownHandle};
pub use utils::signals::shutdown_signal;
pub use view::{Scene, TimerApp};
