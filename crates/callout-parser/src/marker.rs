//! Scanning marker lines into ranges.
//!
//! A marker line sits directly under a command and points at the parts of
//! it that get a comment:
//!
//! ```text
//! tar -xzf archive.tar.gz
//!     ---  --------------
//! ```
//!
//! - `-` runs mark a range; a blank ends the run.
//! - `+` ends the current run and is included in it.
//! - `!` marks a single point, ending any run in progress.
//!
//! Every other character is ignored: it neither starts nor ends a run.

use std::iter;

use callout_core::range::Range;

/// Scan a marker line into ranges, ordered left to right.
///
/// Columns are counted in characters.
///
/// # Example
///
/// ```
/// # use callout_parser::scan_markers;
/// # use callout_core::range::Range;
/// let ranges = scan_markers("--+ ! ---");
/// assert_eq!(
///     ranges,
///     vec![Range::new(0, 3), Range::point(4), Range::new(6, 3)],
/// );
/// ```
pub fn scan_markers(line: &str) -> Vec<Range> {
    let mut ranges = Vec::new();
    let mut open: Option<usize> = None;

    // The trailing blank closes a run that reaches the end of the line.
    for (column, c) in line.chars().chain(iter::once(' ')).enumerate() {
        match c {
            '-' => {
                open.get_or_insert(column);
            }
            ' ' => {
                if let Some(start) = open.take() {
                    ranges.push(Range::new(start, column - start));
                }
            }
            '+' => {
                if let Some(start) = open.take() {
                    ranges.push(Range::new(start, column - start + 1));
                }
            }
            '!' => {
                if let Some(start) = open.take() {
                    ranges.push(Range::new(start, column - start));
                }
                ranges.push(Range::point(column));
            }
            _ => {}
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers() {
        assert!(scan_markers("").is_empty());
        assert!(scan_markers("     ").is_empty());
        assert!(scan_markers("abc xyz").is_empty());
    }

    #[test]
    fn test_dash_run() {
        assert_eq!(scan_markers("   ---            "), vec![Range::new(3, 3)]);
    }

    #[test]
    fn test_run_to_end_of_line() {
        assert_eq!(scan_markers("  ----"), vec![Range::new(2, 4)]);
    }

    #[test]
    fn test_plus_is_inclusive() {
        assert_eq!(scan_markers("--+"), vec![Range::new(0, 3)]);
        assert_eq!(scan_markers("-+-+"), vec![Range::new(0, 2), Range::new(2, 2)]);
    }

    #[test]
    fn test_plus_without_run_is_ignored() {
        assert_eq!(scan_markers("+ --"), vec![Range::new(2, 2)]);
    }

    #[test]
    fn test_bang_point() {
        assert_eq!(scan_markers("!"), vec![Range::point(0)]);
        assert_eq!(scan_markers("   !"), vec![Range::point(3)]);
    }

    #[test]
    fn test_bang_closes_open_run() {
        assert_eq!(scan_markers("---!"), vec![Range::new(0, 3), Range::point(3)]);
    }

    #[test]
    fn test_adjacent_bangs() {
        assert_eq!(scan_markers("!!"), vec![Range::point(0), Range::point(1)]);
    }

    #[test]
    fn test_other_characters_are_ignored() {
        assert_eq!(scan_markers("--x--"), vec![Range::new(0, 5)]);
        assert_eq!(scan_markers("x -\t- "), vec![Range::new(2, 3)]);
    }

    #[test]
    fn test_columns_count_characters() {
        assert_eq!(scan_markers("ää --"), vec![Range::new(3, 2)]);
    }

    #[test]
    fn test_mixed_line() {
        assert_eq!(
            scan_markers("--- ! -+ -"),
            vec![
                Range::new(0, 3),
                Range::point(4),
                Range::new(6, 2),
                Range::new(9, 1),
            ]
        );
    }
}
