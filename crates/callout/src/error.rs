//! Error types for callout operations.
//!
//! This module provides the main error type [`CalloutError`] which wraps
//! the error conditions that can occur while explaining commands.

use std::io;

use thiserror::Error;

use callout_core::glyph::GlyphError;
use callout_parser::ParseError;

/// The main error type for callout operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the source text next to the parser
/// diagnostics, so their spans can be shown in context.
#[derive(Debug, Error)]
pub enum CalloutError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Glyph error: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CalloutError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
