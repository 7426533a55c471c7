//! Collecting comment paragraphs after a marker line.

use std::slice;

use log::trace;

use crate::source::SourceLine;

/// Collect up to `expected` comment paragraphs from `lines`.
///
/// Consecutive non-blank lines are trimmed and joined with single spaces. A
/// blank line closes the pending paragraph, and the end of input closes it
/// too. Collection stops right after the `expected`-th paragraph, leaving
/// the rest of `lines` for the next command.
pub(crate) fn extract_comments(
    lines: &mut slice::Iter<'_, SourceLine<'_>>,
    expected: usize,
) -> Vec<String> {
    let mut comments = Vec::with_capacity(expected);
    let mut paragraph: Vec<&str> = Vec::new();

    while comments.len() < expected {
        let Some(line) = lines.next() else {
            if !paragraph.is_empty() {
                comments.push(paragraph.join(" "));
            }
            break;
        };

        let text = line.text().trim();
        if !text.is_empty() {
            paragraph.push(text);
        } else if !paragraph.is_empty() {
            trace!(line = line.number(), parts = paragraph.len(); "Closed comment paragraph");
            comments.push(paragraph.join(" "));
            paragraph.clear();
        }
    }

    comments
}
