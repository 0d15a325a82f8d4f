//! Utility functions module
//!
//! Process-level helpers for the binary.

pub mod signals;

pub use signals::shutdown_signal;
