//! The result of parsing a whole explanation file.

use callout_core::explanation::Explanation;

use crate::error::Diagnostic;

/// Every explanation of a source document, in source order, together with
/// the warnings raised while parsing it.
#[derive(Debug, Clone, Default)]
pub struct Document {
    explanations: Vec<Explanation>,
    diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// Create a document from parsed explanations and warnings.
    pub fn new(explanations: Vec<Explanation>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            explanations,
            diagnostics,
        }
    }

    /// Returns the explanations in source order.
    pub fn explanations(&self) -> &[Explanation] {
        &self.explanations
    }

    /// Returns the warnings raised while parsing.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns the number of explanations.
    pub fn len(&self) -> usize {
        self.explanations.len()
    }

    /// Returns `true` if the source held no command at all.
    pub fn is_empty(&self) -> bool {
        self.explanations.is_empty()
    }
}
