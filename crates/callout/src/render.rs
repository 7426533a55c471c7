//! Text rendering of explanations.
//!
//! The command is printed first; below it a [`Canvas`] holds, from top to
//! bottom, the bracket row, an optional spacer row, and one corner row per
//! comment (followed by its wrapped continuation lines). Vertical
//! connectors run from the bracket row down to each corner.
//!
//! ```text
//! tar -xzf archive.tar.gz
//!     \_/  \____________/
//!      |          |
//!      |          \- the archive
//!      |
//!      \- extract a gzip-compressed archive
//! ```

use log::trace;
use textwrap::{
    WordSeparator, WordSplitter,
    word_splitters::split_words,
};

use callout_core::{
    config::RenderConfig,
    draw::Canvas,
    explanation::{Association, Explanation},
    range::Range,
};

/// Columns kept free right of the command for comment text.
const COMMENT_MARGIN: usize = 10;

/// Render one explanation.
///
/// Every line of the result is right-trimmed and ends with `\n`. A command
/// without associations renders as the command line alone.
pub fn render(explanation: &Explanation, config: &RenderConfig) -> String {
    let command = explanation.command();
    let associations = match explanation.associations() {
        Some(associations) if !associations.is_empty() => associations,
        _ => return format!("{}\n", command.trim_end()),
    };

    let glyphs = config.glyphs();
    let corner_width = glyphs.corner_width();
    // Trailing blanks of the command still count towards the width.
    let width = effective_width(config.width(), command, associations, corner_width);
    trace!(width, associations = associations.len(); "Rendering explanation");

    let mut canvas = Canvas::new(width);
    let bracket_row = canvas.push_row();

    // Keep a connector visible between the topmost bracket and its corner.
    if associations[0].range().has_bracket() {
        canvas.push_row();
    }

    let mut corners = Vec::with_capacity(associations.len());
    for (index, association) in associations.iter().enumerate() {
        let column = association.range().corner_column();
        let row = canvas.push_row();
        canvas.put_str(column, row, glyphs.corner());
        corners.push((column, row));

        let text_column = column + corner_width;
        for (n, line) in wrap(association.comment(), width.saturating_sub(text_column))
            .iter()
            .enumerate()
        {
            let row = if n == 0 { row } else { canvas.push_row() };
            canvas.put_str(text_column, row, line);
        }

        if index + 1 < associations.len() {
            canvas.push_row();
        }
    }

    for (column, row) in corners {
        canvas.put_column(column, bracket_row..row, glyphs.straight());
    }

    let bracket = glyphs.range();
    for range in associations
        .iter()
        .map(Association::range)
        .filter(Range::has_bracket)
    {
        let last = range.end() - 1;
        canvas.put(range.start(), bracket_row, bracket.open());
        for column in range.start() + 1..last {
            canvas.put(column, bracket_row, bracket.fill());
        }
        canvas.put(last, bracket_row, bracket.close());
        canvas.put(range.start() + range.len() / 2, bracket_row, glyphs.joint());
    }

    let mut output = String::with_capacity((canvas.height() + 1) * (width + 1));
    output.push_str(command.trim_end());
    output.push('\n');
    for line in canvas.to_lines() {
        output.push_str(&line);
        output.push('\n');
    }
    output
}

/// Render every explanation, separating consecutive blocks by a blank line.
pub fn render_all<'a>(
    explanations: impl IntoIterator<Item = &'a Explanation>,
    config: &RenderConfig,
) -> String {
    explanations
        .into_iter()
        .map(|explanation| render(explanation, config))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Width of the canvas: the target width, widened to fit the command plus
/// a margin.
///
/// A corner past that width widens the canvas just enough to keep one
/// column of comment text; bracket cells past it are clipped.
fn effective_width(
    target: usize,
    command: &str,
    associations: &[Association],
    corner_width: usize,
) -> usize {
    let corner_reach = associations
        .iter()
        .map(|association| association.range().corner_column() + corner_width + 1)
        .max()
        .unwrap_or(0);

    target
        .max(command.chars().count() + COMMENT_MARGIN)
        .max(corner_reach)
}

/// Greedy first-fit wrap, measured in characters.
///
/// Lines break at blanks and after the hyphen of a hyphenated word. A
/// fragment longer than a whole line fills the rest of the current line and
/// continues on the next, breaking after a hyphen when one is in reach.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let splitter = WordSplitter::Custom(hyphen_split_points);
    let words = WordSeparator::AsciiSpace.find_words(text);

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut used = 0;
    let mut gap = "";

    for fragment in split_words(words, &splitter) {
        let mut rest = fragment.word;
        while !rest.is_empty() {
            let gap_len = if used > 0 { gap.chars().count() } else { 0 };
            let len = rest.chars().count();

            if used + gap_len + len <= width {
                if used > 0 {
                    line.push_str(gap);
                }
                line.push_str(rest);
                used += gap_len + len;
                rest = "";
            } else if len > width && used + gap_len < width {
                let end = long_word_break(rest, width - used - gap_len);
                if used > 0 {
                    line.push_str(gap);
                }
                line.push_str(&rest[..end]);
                rest = &rest[end..];
                lines.push(std::mem::take(&mut line));
                used = 0;
            } else {
                lines.push(std::mem::take(&mut line));
                used = 0;
            }
        }
        gap = fragment.whitespace;
    }

    if used > 0 {
        lines.push(line);
    }
    lines
}

/// Byte offset at which to cut a word too long for any line, given the
/// `space` characters left on the current one.
fn long_word_break(word: &str, space: usize) -> usize {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut end = space;
    if let Some(hyphen) = chars[..space].iter().rposition(|&(_, c)| c == '-') {
        if hyphen > 0 && chars[..hyphen].iter().any(|&(_, c)| c != '-') {
            end = hyphen + 1;
        }
    }
    chars.get(end).map_or(word.len(), |&(offset, _)| offset)
}

/// Split points of a word: after a hyphen joining two letters each side
/// (`multi-line`, `a-b-cd`), and around a dash run between words
/// (`yes--no`).
fn hyphen_split_points(word: &str) -> Vec<usize> {
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let at = |i: usize| chars.get(i).map(|&(_, c)| c);
    let offset = |i: usize| chars.get(i).map_or(word.len(), |&(offset, _)| offset);
    let letter = |c: Option<char>| c.is_some_and(|c| c.is_alphabetic() || c == '_');
    let word_char = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let word_punct = |c: Option<char>| word_char(c) || c.is_some_and(|c| "!\"'&.,?".contains(c));

    let mut points = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if at(i) != Some('-') {
            i += 1;
            continue;
        }
        let run_end = (i..chars.len())
            .find(|&j| at(j) != Some('-'))
            .unwrap_or(chars.len());

        if run_end - i >= 2 {
            if i > 0 && word_punct(at(i - 1)) && word_char(at(run_end)) {
                points.push(offset(i));
                points.push(offset(run_end));
            }
        } else {
            let before = (i >= 2 && letter(at(i - 2)) && letter(at(i - 1)))
                || (i >= 3 && letter(at(i - 3)) && at(i - 2) == Some('-') && letter(at(i - 1)));
            let after = letter(at(i + 1))
                && (letter(at(i + 2)) || (at(i + 2) == Some('-') && letter(at(i + 3))));
            if before && after {
                points.push(offset(i + 1));
            }
        }
        i = run_end;
    }
    points
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use callout_core::glyph::Preset;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn association_strategy() -> impl Strategy<Value = Association> {
        (0usize..30, 0usize..8, "[a-z]{1,12}( [a-z]{1,12}){0,6}")
            .prop_map(|(start, len, comment)| Association::new(Range::new(start, len), comment))
    }

    fn explanation_strategy() -> impl Strategy<Value = Explanation> {
        (
            "[a-z -]{0,40}",
            prop::collection::vec(association_strategy(), 1..5),
        )
            .prop_map(|(command, mut associations)| {
                associations.sort_by_key(|a| std::cmp::Reverse(a.range().start()));
                Explanation::new(command, associations)
            })
    }

    fn config_strategy() -> impl Strategy<Value = RenderConfig> {
        (0usize..100, prop::sample::select(Preset::ALL.to_vec()))
            .prop_map(|(width, preset)| RenderConfig::new(width, preset.glyphs()))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// No rendered line carries trailing whitespace.
    fn check_no_trailing_whitespace(
        explanation: &Explanation,
        config: &RenderConfig,
    ) -> Result<(), TestCaseError> {
        let output = render(explanation, config);
        prop_assert!(output.ends_with('\n'));
        for line in output.lines() {
            prop_assert_eq!(line.trim_end(), line);
        }
        Ok(())
    }

    /// Rendering is a pure function of its inputs.
    fn check_deterministic(
        explanation: &Explanation,
        config: &RenderConfig,
    ) -> Result<(), TestCaseError> {
        prop_assert_eq!(render(explanation, config), render(explanation, config));
        Ok(())
    }

    /// Wide ranges get a bracket of exactly `len` cells with the joint at the midpoint.
    fn check_single_bracket(
        start: usize,
        len: usize,
        config: &RenderConfig,
    ) -> Result<(), TestCaseError> {
        let explanation = Explanation::new("cmd", vec![Association::new(Range::new(start, len), "c")]);
        let config = config.clone().with_width(config.width().max(start + len));
        let output = render(&explanation, &config);
        let bracket_row: Vec<char> = output.lines().nth(1).unwrap_or_default().chars().collect();
        let glyphs = config.glyphs();

        if len >= 3 {
            prop_assert_eq!(bracket_row.len(), start + len);
            prop_assert_eq!(bracket_row[start], glyphs.range().open());
            prop_assert_eq!(bracket_row[start + len - 1], glyphs.range().close());
            prop_assert_eq!(bracket_row[start + len / 2], glyphs.joint());
        } else {
            // Only the connector reaches the bracket row.
            prop_assert_eq!(bracket_row.len(), start + 1);
            prop_assert_eq!(bracket_row[start], glyphs.straight());
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn no_trailing_whitespace(explanation in explanation_strategy(), config in config_strategy()) {
            check_no_trailing_whitespace(&explanation, &config)?;
        }

        #[test]
        fn deterministic(explanation in explanation_strategy(), config in config_strategy()) {
            check_deterministic(&explanation, &config)?;
        }

        #[test]
        fn single_bracket(start in 0usize..40, len in 0usize..12, config in config_strategy()) {
            check_single_bracket(start, len, &config)?;
        }
    }
}
