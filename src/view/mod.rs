//! View module
//!
//! The digit grid, the window layout, and the eframe app that draws them.

pub mod grid;
pub mod scene;
pub mod window;

pub use grid::{Label, TimerGrid};
pub use scene::Scene;
pub use window::TimerApp;
