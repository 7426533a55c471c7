//! Diagnostics for the callout parser.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing at the offending lines
//! - Severity levels
//! - A collector accumulating diagnostics over a whole document
//!
//! # Overview
//!
//! Parsing an explanation file never fails on its own: input that cannot be
//! fully used is truncated and reported as a warning [`Diagnostic`]. When
//! strict parsing is requested the warnings are promoted to errors and
//! returned together as a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use callout_parser::error::{Diagnostic, ErrorCode};
//! # use callout_parser::Span;
//!
//! let diag = Diagnostic::warning("2 markers have no comment")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(12..30), "markers declared here")
//!     .with_help("add one comment paragraph per marker");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
