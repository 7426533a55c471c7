//! Character ranges marked under a command line.
//!
//! A [`Range`] locates the span of the command a comment explains. Ranges
//! are measured in characters, not bytes, so that columns on the marker line
//! line up with columns of the command above it.

use std::fmt;

/// Minimum length for a range to be drawn as a bracket.
const BRACKET_MIN_LEN: usize = 3;

/// A span of characters in a command, or a single point.
///
/// A range with `len == 0` is a point marker: it has no bracket and its
/// corner sits directly under `start`. Ranges of three or more characters
/// get a bracket on the annotation row and their corner moves to the
/// midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Range {
    start: usize,
    len: usize,
}

impl Range {
    /// Creates a range starting at column `start` spanning `len` characters.
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Creates a zero-length point marker at column `start`.
    pub fn point(start: usize) -> Self {
        Self::new(start, 0)
    }

    /// Returns the first column of the range.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the number of characters covered by the range.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` for zero-length point markers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` for zero-length point markers.
    ///
    /// Alias of [`Range::is_empty`] that reads better at call sites dealing
    /// with `!` markers.
    pub fn is_point(&self) -> bool {
        self.is_empty()
    }

    /// Returns the column one past the last character of the range.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Returns `true` if the range is wide enough to get a bracket.
    pub fn has_bracket(&self) -> bool {
        self.len >= BRACKET_MIN_LEN
    }

    /// Returns how far the corner is shifted right of `start`.
    ///
    /// Wide ranges put their corner under the midpoint; short ranges and
    /// points keep it under `start`.
    pub fn corner_offset(&self) -> usize {
        if self.has_bracket() { self.len / 2 } else { 0 }
    }

    /// Returns the column of the corner glyph and the vertical connector.
    pub fn corner_column(&self) -> usize {
        self.start + self.corner_offset()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "@{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_range() {
        let range = Range::point(4);

        assert!(range.is_point());
        assert!(!range.has_bracket());
        assert_eq!(range.end(), 4);
        assert_eq!(range.corner_column(), 4);
    }

    #[test]
    fn test_short_ranges_keep_corner_at_start() {
        for len in 1..BRACKET_MIN_LEN {
            let range = Range::new(10, len);
            assert!(!range.has_bracket());
            assert_eq!(range.corner_offset(), 0);
            assert_eq!(range.corner_column(), 10);
        }
    }

    #[test]
    fn test_wide_range_corner_at_midpoint() {
        assert_eq!(Range::new(3, 3).corner_column(), 4);
        assert_eq!(Range::new(3, 4).corner_column(), 5);
        assert_eq!(Range::new(0, 9).corner_column(), 4);
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::new(2, 5).to_string(), "2..7");
        assert_eq!(Range::point(7).to_string(), "@7");
    }
}
