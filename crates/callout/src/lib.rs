//! Callout - draw diagrams that explain command lines.
//!
//! An explanation file pairs a command with a marker line underneath it and
//! one comment paragraph per marker. This crate parses such files and draws
//! each command with brackets under the marked parts and connectors leading
//! down to the comments.

pub mod config;
pub mod render;

mod error;

pub use callout_core::{explanation, glyph, range};
pub use callout_parser::{Document, error::Diagnostic};

pub use error::CalloutError;

use log::{debug, info, trace};

use callout_core::{config::RenderConfig, explanation::Explanation};
use callout_parser::ParseConfig;

use config::AppConfig;

/// Parses explanation files and renders them as text diagrams.
///
/// The configuration is resolved once on construction, so a malformed glyph
/// override is reported before any input is read.
///
/// # Examples
///
/// ```rust
/// use callout::{Explainer, config::AppConfig};
///
/// let source = "rm -rf /tmp/foo\n   ---\nrecursive flag\n";
///
/// let explainer = Explainer::new(AppConfig::default())
///     .expect("Default configuration is valid");
///
/// // Parse source to explanations
/// let document = explainer.parse(source)
///     .expect("Failed to parse");
///
/// // Render every explanation
/// let text = explainer.render_document(&document);
/// assert_eq!(text, "rm -rf /tmp/foo\n   \\_/\n    |\n    \\- recursive flag\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Explainer {
    render: RenderConfig,
    parse: ParseConfig,
}

impl Explainer {
    /// Create a new explainer with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CalloutError::Glyph`] if a glyph override in `config` is
    /// malformed.
    pub fn new(config: AppConfig) -> Result<Self, CalloutError> {
        let render = config.render_config()?;
        let parse = config.parse_config();
        debug!(
            width = render.width(),
            strict = parse.strict();
            "Explainer configured",
        );

        Ok(Self { render, parse })
    }

    /// Returns the resolved render settings.
    pub fn render_config(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the resolved parse settings.
    pub fn parse_config(&self) -> &ParseConfig {
        &self.parse
    }

    /// Parse source text into a document of explanations.
    ///
    /// Lossy input is reported through [`Document::diagnostics`] unless
    /// strict parsing is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`CalloutError::Parse`] with the source attached when strict
    /// parsing rejects the input.
    pub fn parse(&self, source: &str) -> Result<Document, CalloutError> {
        info!(bytes = source.len(); "Parsing explanations");

        let document = callout_parser::parse(source, &self.parse)
            .map_err(|err| CalloutError::new_parse_error(err, source))?;

        debug!(
            explanations = document.len(),
            warnings = document.diagnostics().len();
            "Explanations parsed",
        );
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Render a single explanation.
    pub fn render(&self, explanation: &Explanation) -> String {
        render::render(explanation, &self.render)
    }

    /// Render every explanation of a document, one block each, separated by
    /// blank lines.
    pub fn render_document(&self, document: &Document) -> String {
        info!(explanations = document.len(); "Rendering document");
        render::render_all(document.explanations(), &self.render)
    }

    /// Parse and render in one step.
    ///
    /// # Errors
    ///
    /// See [`Explainer::parse`].
    pub fn explain(&self, source: &str) -> Result<String, CalloutError> {
        let document = self.parse(source)?;
        Ok(self.render_document(&document))
    }
}
