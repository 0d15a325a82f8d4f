//! Background tasks module
//!
//! The ticking countdown and the outputs that follow it.

pub mod countdown;
pub mod display;
pub mod window;

// Re-export main functions
pub use countdown::{spawn_countdown, CountdownEnd, CountdownHandle};
pub use display::display_task;
pub use window::{close_on_signal, repaint_task};
