//! Configuration and CLI argument handling

use clap::{Parser, ValueEnum};

use crate::view::scene::DEFAULT_TITLE;

/// Where the countdown is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Native window with the digit labels
    #[default]
    Window,
    /// Headless: one JSON snapshot per line on stdout
    Json,
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-timer")]
#[command(about = "A minimal MM:SS countdown timer")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Countdown length in minutes (1-99)
    #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
    pub minutes: i64,

    /// Window title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Window)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
