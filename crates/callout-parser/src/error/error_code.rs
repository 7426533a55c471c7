//! Error codes for the callout diagnostic system.
//!
//! Codes are organized by the line they concern:
//! - `E1xx` - Marker line problems
//! - `E2xx` - Comment problems

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Marker Line (E1xx)
    // =========================================================================
    /// Marker line without markers.
    ///
    /// The line after a command is not blank but contains no `-`, `+` or
    /// `!`. It was consumed as the marker line and the command is emitted
    /// without annotations.
    E100,

    // =========================================================================
    // Comments (E2xx)
    // =========================================================================
    /// Unmatched markers.
    ///
    /// The marker line declares more ranges than there are comment
    /// paragraphs. The right-most ranges without a comment are dropped.
    E200,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E200 => "E200",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
