//! MM:SS digit decomposition

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four digits shown by the timer, derived from remaining seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Digits {
    pub minute_tens: u8,
    pub minute_units: u8,
    pub second_tens: u8,
    pub second_units: u8,
}

impl Digits {
    /// Split remaining seconds into minute and second digits
    pub fn from_remaining(remaining_seconds: u32) -> Self {
        let minutes = remaining_seconds / 60;
        let seconds = remaining_seconds % 60;

        Self {
            minute_tens: ((minutes / 10) % 10) as u8,
            minute_units: (minutes % 10) as u8,
            second_tens: (seconds / 10) as u8,
            second_units: (seconds % 10) as u8,
        }
    }

    /// Label texts in display order: minute tens, minute units, second tens, second units
    pub fn labels(&self) -> [String; 4] {
        [
            self.minute_tens.to_string(),
            self.minute_units.to_string(),
            self.second_tens.to_string(),
            self.second_units.to_string(),
        ]
    }
}

impl fmt::Display for Digits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}:{}{}",
            self.minute_tens, self.minute_units, self.second_tens, self.second_units
        )
    }
}
