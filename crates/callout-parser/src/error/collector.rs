//! Collector for accumulating diagnostics over a document.

use crate::error::{Diagnostic, ParseError};

/// Accumulates diagnostics so a document reports every problem at once.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// - With `strict`, every diagnostic is promoted to an error.
    /// - If there are errors, returns `Err(ParseError)` with all diagnostics.
    /// - Otherwise returns the warnings.
    pub fn finish(self, strict: bool) -> Result<Vec<Diagnostic>, ParseError> {
        let has_errors = self.has_errors || (strict && !self.diagnostics.is_empty());
        if !has_errors {
            return Ok(self.diagnostics);
        }

        let diagnostics = if strict {
            self.diagnostics
                .into_iter()
                .map(Diagnostic::into_error)
                .collect()
        } else {
            self.diagnostics
        };
        Err(ParseError::new(diagnostics))
    }
}
