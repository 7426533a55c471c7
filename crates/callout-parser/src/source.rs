//! Splitting the source document into lines.

use crate::span::Span;

/// One line of the source, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SourceLine<'src> {
    /// 1-based line number in the source.
    number: usize,
    span: Span,
    text: &'src str,
}

impl<'src> SourceLine<'src> {
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Blank lines separate commands and comment paragraphs.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split `source` on `\n`, dropping lines that start with an ignore prefix.
///
/// A trailing `\r` is stripped from every line. Spans still refer to the
/// unmodified source.
pub(crate) fn split_lines<'src>(source: &'src str, ignore_prefixes: &[char]) -> Vec<SourceLine<'src>> {
    let mut offset = 0;
    let mut lines = Vec::new();

    for (index, raw) in source.split('\n').enumerate() {
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        let start = offset;
        offset += raw.len() + 1;

        if text.starts_with(ignore_prefixes) {
            continue;
        }

        lines.push(SourceLine {
            number: index + 1,
            span: Span::new(start..start + text.len()),
            text,
        });
    }

    lines
}
