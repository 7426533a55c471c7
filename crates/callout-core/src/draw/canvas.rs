//! Fixed-width character grid.
//!
//! The canvas is a row-major buffer of characters. Every row is exactly
//! `width` cells wide and starts out filled with spaces. Writes outside the
//! grid are dropped rather than growing a row, so a diagram can never
//! scramble its own column arithmetic.
//!
//! # Example
//!
//! ```
//! # use callout_core::draw::Canvas;
//! let mut canvas = Canvas::new(8);
//!
//! let row = canvas.push_row();
//! canvas.put_str(2, row, "\\- hi");
//! canvas.put(0, row, '|');
//!
//! assert_eq!(canvas.to_lines(), vec!["| \\- hi".to_string()]);
//! ```

use log::trace;

const BLANK: char = ' ';

/// A growable grid of fixed-width character rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Canvas {
    /// Creates an empty canvas whose rows are `width` cells wide.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Returns the width of every row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Appends a blank row and returns its index.
    pub fn push_row(&mut self) -> usize {
        self.rows.push(vec![BLANK; self.width]);
        self.rows.len() - 1
    }

    /// Returns the character at `(column, row)`, if it is on the canvas.
    pub fn get(&self, column: usize, row: usize) -> Option<char> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Writes `glyph` at `(column, row)`.
    ///
    /// Returns `false` and leaves the canvas untouched when the position is
    /// outside the grid.
    pub fn put(&mut self, column: usize, row: usize, glyph: char) -> bool {
        match self.rows.get_mut(row).and_then(|cells| cells.get_mut(column)) {
            Some(cell) => {
                *cell = glyph;
                true
            }
            None => {
                trace!(column, row, width = self.width; "Dropped write outside canvas");
                false
            }
        }
    }

    /// Writes `text` left to right starting at `(column, row)`.
    ///
    /// Characters that fall past the end of the row are dropped. Returns the
    /// number of characters written.
    pub fn put_str(&mut self, column: usize, row: usize, text: &str) -> usize {
        text.chars()
            .enumerate()
            .take_while(|(offset, glyph)| self.put(column + offset, row, *glyph))
            .count()
    }

    /// Writes `glyph` at `column` in every row of `rows`.
    pub fn put_column(&mut self, column: usize, rows: std::ops::Range<usize>, glyph: char) {
        for row in rows {
            self.put(column, row, glyph);
        }
    }

    /// Returns every row as a string with trailing whitespace removed.
    pub fn to_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_is_blank() {
        let mut canvas = Canvas::new(5);

        assert_eq!(canvas.push_row(), 0);
        assert_eq!(canvas.push_row(), 1);
        assert_eq!(canvas.height(), 2);
        assert_eq!(canvas.get(4, 1), Some(' '));
        assert_eq!(canvas.to_lines(), vec!["", ""]);
    }

    #[test]
    fn test_put_out_of_bounds_is_dropped() {
        let mut canvas = Canvas::new(3);
        canvas.push_row();

        assert!(canvas.put(2, 0, 'x'));
        assert!(!canvas.put(3, 0, 'y'));
        assert!(!canvas.put(0, 1, 'z'));
        assert_eq!(canvas.to_lines(), vec!["  x"]);
    }

    #[test]
    fn test_put_str_clips_at_row_end() {
        let mut canvas = Canvas::new(6);
        let row = canvas.push_row();

        assert_eq!(canvas.put_str(3, row, "abcdef"), 3);
        assert_eq!(canvas.to_lines(), vec!["   abc"]);
    }

    #[test]
    fn test_put_str_counts_characters() {
        let mut canvas = Canvas::new(4);
        let row = canvas.push_row();

        assert_eq!(canvas.put_str(0, row, "└─┘"), 3);
        assert_eq!(canvas.get(1, row), Some('─'));
    }

    #[test]
    fn test_put_column() {
        let mut canvas = Canvas::new(3);
        for _ in 0..4 {
            canvas.push_row();
        }

        canvas.put_column(1, 0..3, '|');

        assert_eq!(canvas.to_lines(), vec![" |", " |", " |", ""]);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn write_strategy() -> impl Strategy<Value = (usize, usize, String)> {
        (0usize..40, 0usize..6, "[a-z \\-|]{0,30}")
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Rows never grow past the canvas width and never keep trailing spaces.
    fn check_lines_fit_and_are_trimmed(
        width: usize,
        writes: Vec<(usize, usize, String)>,
    ) -> Result<(), TestCaseError> {
        let mut canvas = Canvas::new(width);
        for _ in 0..4 {
            canvas.push_row();
        }
        for (column, row, text) in &writes {
            canvas.put_str(*column, *row, text);
        }

        prop_assert_eq!(canvas.height(), 4);
        for line in canvas.to_lines() {
            prop_assert!(line.chars().count() <= width, "line too wide: {line:?}");
            prop_assert_eq!(line.trim_end(), line.as_str());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn lines_fit_and_are_trimmed(width in 0usize..32, writes in prop::collection::vec(write_strategy(), 0..8)) {
            check_lines_fit_and_are_trimmed(width, writes)?;
        }
    }
}
