//! Commands paired with the comments that explain them.

use crate::range::Range;

/// One comment attached to one [`Range`] of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    range: Range,
    comment: String,
}

impl Association {
    /// Creates an association between `range` and `comment`.
    pub fn new(range: Range, comment: impl Into<String>) -> Self {
        Self {
            range,
            comment: comment.into(),
        }
    }

    /// Returns the range of the command being explained.
    pub fn range(&self) -> Range {
        self.range
    }

    /// Returns the comment paragraph.
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// A command line and its annotations.
///
/// Associations are kept in draw order: the first association is drawn at
/// the top of the canvas, which is the right-most range on the marker line.
/// An explanation without associations is emitted as the bare command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    command: String,
    associations: Option<Vec<Association>>,
}

impl Explanation {
    /// Creates an annotated explanation.
    ///
    /// `associations` must already be in draw order.
    pub fn new(command: impl Into<String>, associations: Vec<Association>) -> Self {
        Self {
            command: command.into(),
            associations: Some(associations),
        }
    }

    /// Creates an explanation that renders as the command alone.
    pub fn bare(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            associations: None,
        }
    }

    /// Returns the command line.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Returns the associations in draw order, or `None` for a bare command.
    pub fn associations(&self) -> Option<&[Association]> {
        self.associations.as_deref()
    }

    /// Returns `true` if there is at least one comment to draw.
    pub fn is_annotated(&self) -> bool {
        self.associations().is_some_and(|assocs| !assocs.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_explanation() {
        let explanation = Explanation::bare("ls -l");

        assert_eq!(explanation.command(), "ls -l");
        assert!(explanation.associations().is_none());
        assert!(!explanation.is_annotated());
    }

    #[test]
    fn test_empty_associations_are_not_annotated() {
        let explanation = Explanation::new("ls -l", Vec::new());

        assert_eq!(explanation.associations(), Some(&[][..]));
        assert!(!explanation.is_annotated());
    }

    #[test]
    fn test_annotated_explanation() {
        let explanation = Explanation::new(
            "ls -l",
            vec![Association::new(Range::new(3, 2), "long listing")],
        );

        assert!(explanation.is_annotated());
        let assocs = explanation.associations().unwrap();
        assert_eq!(assocs[0].range(), Range::new(3, 2));
        assert_eq!(assocs[0].comment(), "long listing");
    }
}
