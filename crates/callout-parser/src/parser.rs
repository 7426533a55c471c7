//! Document parser.
//!
//! Walks the source lines and turns every command block into an
//! [`Explanation`]. The public entry point is [`parse`](crate::parse).

use std::slice;

use log::{debug, trace};

use callout_core::{
    explanation::{Association, Explanation},
    range::Range,
};

use crate::{
    comment::extract_comments,
    config::ParseConfig,
    document::Document,
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    marker::scan_markers,
    source::{SourceLine, split_lines},
};

/// Parse a whole document.
pub(crate) fn parse_document(source: &str, config: &ParseConfig) -> Result<Document, ParseError> {
    let lines = split_lines(source, config.ignore_prefixes());
    let mut parser = Parser {
        lines: lines.iter(),
        collector: DiagnosticCollector::new(),
    };

    let mut explanations = Vec::new();
    while let Some(explanation) = parser.next_explanation() {
        explanations.push(explanation);
    }

    let diagnostics = parser.collector.finish(config.strict())?;
    Ok(Document::new(explanations, diagnostics))
}

struct Parser<'a, 'src> {
    lines: slice::Iter<'a, SourceLine<'src>>,
    collector: DiagnosticCollector,
}

impl Parser<'_, '_> {
    /// Parse the next command block, or `None` at the end of input.
    fn next_explanation(&mut self) -> Option<Explanation> {
        let command = *self.lines.by_ref().find(|line| !line.is_blank())?;

        // A command on the last line has no marker line; treat it as blank.
        let marker = self.lines.next().copied();
        let ranges = marker.map(|line| scan_markers(line.text())).unwrap_or_default();

        if ranges.is_empty() {
            if let Some(marker) = marker.filter(|line| !line.is_blank()) {
                self.collector.emit(no_markers(&command, &marker));
            }
            trace!(line = command.number(); "Command without markers");
            return Some(Explanation::bare(command.text()));
        }

        let comments = extract_comments(&mut self.lines, ranges.len());
        debug!(
            line = command.number(),
            ranges = ranges.len(),
            comments = comments.len();
            "Parsed command block"
        );

        if comments.len() < ranges.len() {
            if let Some(marker) = marker {
                self.collector
                    .emit(unmatched_markers(&command, &marker, &ranges[comments.len()..]));
            }
        }

        if comments.is_empty() {
            return Some(Explanation::bare(command.text()));
        }

        // Right-most range first, so connectors drawn top to bottom never cross.
        let mut associations: Vec<Association> = ranges
            .into_iter()
            .zip(comments)
            .map(|(range, comment)| Association::new(range, comment))
            .collect();
        associations.reverse();

        Some(Explanation::new(command.text(), associations))
    }
}

fn no_markers(command: &SourceLine<'_>, marker: &SourceLine<'_>) -> Diagnostic {
    Diagnostic::warning("marker line has no markers")
        .with_code(ErrorCode::E100)
        .with_label(marker.span(), "expected `-`, `+` or `!` on this line")
        .with_secondary_label(command.span(), "for this command")
        .with_help("leave a blank line after a command that needs no annotations")
}

fn unmatched_markers(
    command: &SourceLine<'_>,
    marker: &SourceLine<'_>,
    dropped: &[Range],
) -> Diagnostic {
    let columns = dropped
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let message = match dropped.len() {
        1 => "1 marker has no comment".to_string(),
        n => format!("{n} markers have no comment"),
    };

    Diagnostic::warning(message)
        .with_code(ErrorCode::E200)
        .with_label(marker.span(), format!("dropped markers at {columns}"))
        .with_secondary_label(command.span(), "for this command")
        .with_help("add one comment paragraph per marker, separated by blank lines")
}
