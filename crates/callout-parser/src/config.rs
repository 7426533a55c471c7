//! Settings for the parsing phase.

/// Configuration for [`parse`](crate::parse).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    ignore_prefixes: Vec<char>,
    strict: bool,
}

impl ParseConfig {
    /// Characters that mark a whole source line as ignored by default.
    pub const DEFAULT_IGNORE_PREFIXES: [char; 1] = [';'];

    /// Create a parse configuration.
    ///
    /// # Arguments
    ///
    /// * `ignore_prefixes` - Lines starting with one of these characters are dropped before parsing.
    /// * `strict` - Promote warnings about lossy input to errors.
    pub fn new(ignore_prefixes: Vec<char>, strict: bool) -> Self {
        Self {
            ignore_prefixes,
            strict,
        }
    }

    /// Returns a copy with strict parsing switched on or off.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the ignore prefixes.
    pub fn ignore_prefixes(&self) -> &[char] {
        &self.ignore_prefixes
    }

    /// Returns `true` if warnings are promoted to errors.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_IGNORE_PREFIXES.to_vec(), false)
    }
}
