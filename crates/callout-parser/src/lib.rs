//! # Callout Parser
//!
//! Parser for annotated command-line explanation files. A file holds one or
//! more blocks, separated by blank lines:
//!
//! ```text
//! tar -xzf archive.tar.gz
//!     ---  --------------
//! extract a gzip-compressed archive
//!
//! the archive to read
//! ```
//!
//! The first line is the command, the second the marker line, and the
//! following paragraphs are the comments, matched to the markers from left
//! to right.
//!
//! ## Usage
//!
//! ```
//! # use callout_parser::{parse, ParseConfig, ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = "rm -rf /tmp/foo\n   ---\nrecursive flag\n";
//!
//!     let document = parse(source, &ParseConfig::default())?;
//!     assert_eq!(document.len(), 1);
//!     assert!(document.diagnostics().is_empty());
//!     Ok(())
//! }
//! ```

pub mod error;

mod comment;
mod config;
mod document;
mod marker;
mod parser;
mod source;
mod span;

pub use config::ParseConfig;
pub use document::Document;
pub use error::ParseError;
pub use marker::scan_markers;
pub use span::Span;

/// Parse source text into explanations.
///
/// Lossy input (a marker line without markers, markers without comments)
/// is reported as warnings in [`Document::diagnostics`], or as a
/// [`ParseError`] when `config` asks for strict parsing.
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every diagnostic when strict parsing
/// is enabled and any diagnostic was raised.
///
/// # Example
///
/// ```
/// # use callout_parser::{parse, ParseConfig};
/// let source = "ls -l\n   --\n\nlong listing\n";
/// let document = parse(source, &ParseConfig::default()).unwrap();
///
/// let explanation = &document.explanations()[0];
/// assert_eq!(explanation.command(), "ls -l");
/// assert_eq!(explanation.associations().unwrap()[0].comment(), "long listing");
/// ```
pub fn parse(source: &str, config: &ParseConfig) -> Result<Document, ParseError> {
    parser::parse_document(source, config)
}
