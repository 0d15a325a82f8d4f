//! Five-cell label grid: minute tens, minute units, separator, second tens, second units

use crate::state::Digits;

/// Number of columns in the grid
pub const COLUMNS: usize = 5;
/// Column holding the literal separator
pub const SEPARATOR_COLUMN: usize = 2;

/// A single text cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// The timer's digit labels laid out in one row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerGrid {
    cells: [Label; COLUMNS],
}

impl TimerGrid {
    /// Create a grid showing `00:00`
    pub fn new() -> Self {
        Self {
            cells: [
                Label::new("0"),
                Label::new("0"),
                Label::new(":"),
                Label::new("0"),
                Label::new("0"),
            ],
        }
    }

    /// Rewrite the four digit labels; the separator never changes
    pub fn refresh(&mut self, digits: &Digits) {
        let [mt, mu, st, su] = digits.labels();
        self.cells[0].set_text(mt);
        self.cells[1].set_text(mu);
        self.cells[3].set_text(st);
        self.cells[4].set_text(su);
    }

    pub fn cell(&self, column: usize) -> Option<&Label> {
        self.cells.get(column)
    }

    /// Label texts in column order
    pub fn texts(&self) -> [&str; COLUMNS] {
        [
            self.cells[0].text(),
            self.cells[1].text(),
            self.cells[2].text(),
            self.cells[3].text(),
            self.cells[4].text(),
        ]
    }
}

impl Default for TimerGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let grid = TimerGrid::new();
        assert_eq!(grid.texts(), ["0", "0", ":", "0", "0"]);
    }

    #[test]
    fn refresh_keeps_separator() {
        let mut grid = TimerGrid::new();
        grid.refresh(&Digits::from_remaining(12 * 60 + 9));

        assert_eq!(grid.texts(), ["1", "2", ":", "0", "9"]);
        assert_eq!(grid.cell(SEPARATOR_COLUMN).map(Label::text), Some(":"));
        assert!(grid.cell(COLUMNS).is_none());
    }
}
