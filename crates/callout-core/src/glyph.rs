//! Glyph sets used to draw callout diagrams.
//!
//! # Overview
//!
//! Exported types:
//! - [`GlyphSet`]: The four glyph groups a renderer needs (corner, straight, range, joint)
//! - [`RangeGlyphs`]: The open/fill/close triple drawn under wide ranges
//! - [`Preset`]: Named, coherent glyph sets (ASCII and several box-drawing styles)
//! - [`GlyphError`]: Rejection of malformed glyphs or unknown preset names
//!
//! # Quick Start
//!
//! ```
//! use callout_core::glyph::{GlyphSet, Preset};
//!
//! // Start from a preset and override a single group
//! let glyphs = Preset::Unicode
//!     .glyphs()
//!     .with_corner("└─ ")
//!     .unwrap();
//! assert_eq!(glyphs.straight(), '│');
//!
//! // Presets are looked up by name, case-insensitively
//! let preset: Preset = "Rounded".parse().unwrap();
//! assert_eq!(preset, Preset::Rounded);
//!
//! // Unknown names are rejected instead of silently substituted
//! assert!("fancy".parse::<Preset>().is_err());
//! # let _ = GlyphSet::default();
//! ```
//!
//! # Preset Table
//!
//! | Preset    | corner | straight | range | joint |
//! |-----------|--------|----------|-------|-------|
//! | `ascii`   | `\- `  | `\|`     | `\_/` | `_`   |
//! | `unicode` | `└ `   | `│`      | `└─┘` | `┬`   |
//! | `rounded` | `╰ `   | `│`      | `╰─╯` | `┬`   |
//! | `double`  | `╚ `   | `║`      | `╚═╝` | `╦`   |
//! | `bold`    | `┗ `   | `┃`      | `┗━┛` | `┳`   |

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Errors raised while building a [`GlyphSet`] or resolving a [`Preset`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlyphError {
    #[error(
        "unknown glyph preset `{0}`, valid presets: ascii, unicode, rounded, double, bold"
    )]
    UnknownPreset(String),

    #[error("corner glyph must not be empty")]
    EmptyCorner,

    #[error("corner glyph `{0}` must not contain line breaks")]
    MultilineCorner(String),

    #[error("{kind} glyph must be exactly one character, got `{value}`")]
    NotSingleChar { kind: &'static str, value: String },

    #[error("range glyphs must be exactly three characters (open, fill, close), got `{0}`")]
    InvalidRange(String),
}

// =============================================================================
// Range Glyphs
// =============================================================================

/// The three glyphs of a bracket drawn under a wide range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeGlyphs {
    open: char,
    fill: char,
    close: char,
}

impl RangeGlyphs {
    /// Creates a bracket from its open, fill and close glyphs.
    pub fn new(open: char, fill: char, close: char) -> Self {
        Self { open, fill, close }
    }

    /// Glyph at the first column of the range.
    pub fn open(&self) -> char {
        self.open
    }

    /// Glyph for every column strictly between open and close.
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Glyph at the last column of the range.
    pub fn close(&self) -> char {
        self.close
    }
}

impl FromStr for RangeGlyphs {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(open), Some(fill), Some(close), None) => Ok(Self::new(open, fill, close)),
            _ => Err(GlyphError::InvalidRange(s.to_string())),
        }
    }
}

impl fmt::Display for RangeGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.open, self.fill, self.close)
    }
}

// =============================================================================
// Glyph Set
// =============================================================================

/// The complete set of glyphs a diagram is drawn with.
///
/// A `GlyphSet` is always valid: the corner is a non-empty single-line
/// string and every other group holds single characters. The `with_*`
/// methods validate string input and return a modified copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphSet {
    corner: String,
    straight: char,
    range: RangeGlyphs,
    joint: char,
}

impl GlyphSet {
    /// Creates a glyph set, validating the corner.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError::EmptyCorner`] or [`GlyphError::MultilineCorner`]
    /// when the corner cannot be drawn on a single row.
    pub fn new(
        corner: impl Into<String>,
        straight: char,
        range: RangeGlyphs,
        joint: char,
    ) -> Result<Self, GlyphError> {
        let corner = corner.into();
        validate_corner(&corner)?;
        Ok(Self {
            corner,
            straight,
            range,
            joint,
        })
    }

    /// Glyph string placed where a connector turns into its comment.
    pub fn corner(&self) -> &str {
        &self.corner
    }

    /// Width of the corner in characters.
    pub fn corner_width(&self) -> usize {
        self.corner.chars().count()
    }

    /// Glyph of vertical connectors.
    pub fn straight(&self) -> char {
        self.straight
    }

    /// Glyphs of range brackets.
    pub fn range(&self) -> RangeGlyphs {
        self.range
    }

    /// Glyph where a connector meets a bracket.
    pub fn joint(&self) -> char {
        self.joint
    }

    /// Returns a copy with a different corner.
    pub fn with_corner(mut self, corner: &str) -> Result<Self, GlyphError> {
        validate_corner(corner)?;
        self.corner = corner.to_string();
        Ok(self)
    }

    /// Returns a copy with a different straight glyph.
    pub fn with_straight(mut self, straight: &str) -> Result<Self, GlyphError> {
        self.straight = single_char("straight", straight)?;
        Ok(self)
    }

    /// Returns a copy with different bracket glyphs.
    pub fn with_range(mut self, range: &str) -> Result<Self, GlyphError> {
        self.range = range.parse()?;
        Ok(self)
    }

    /// Returns a copy with a different joint glyph.
    pub fn with_joint(mut self, joint: &str) -> Result<Self, GlyphError> {
        self.joint = single_char("joint", joint)?;
        Ok(self)
    }
}

impl Default for GlyphSet {
    fn default() -> Self {
        Preset::default().glyphs()
    }
}

fn validate_corner(corner: &str) -> Result<(), GlyphError> {
    if corner.is_empty() {
        return Err(GlyphError::EmptyCorner);
    }
    if corner.contains(['\n', '\r']) {
        return Err(GlyphError::MultilineCorner(corner.to_string()));
    }
    Ok(())
}

fn single_char(kind: &'static str, value: &str) -> Result<char, GlyphError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(GlyphError::NotSingleChar {
            kind,
            value: value.to_string(),
        }),
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Named glyph sets.
///
/// Presets deserialize from their lowercase name through [`FromStr`], so
/// configuration files are validated when they are loaded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Preset {
    /// Plain ASCII (default)
    #[default]
    Ascii,
    /// Light box-drawing characters
    Unicode,
    /// Light box-drawing characters with rounded corners
    Rounded,
    /// Double-line box-drawing characters
    Double,
    /// Heavy box-drawing characters
    Bold,
}

impl Preset {
    /// All presets, in declaration order.
    pub const ALL: [Preset; 5] = [
        Self::Ascii,
        Self::Unicode,
        Self::Rounded,
        Self::Double,
        Self::Bold,
    ];

    /// Returns the name used in configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Unicode => "unicode",
            Self::Rounded => "rounded",
            Self::Double => "double",
            Self::Bold => "bold",
        }
    }

    /// Returns the glyph set of this preset.
    pub fn glyphs(&self) -> GlyphSet {
        let (corner, straight, [open, fill, close], joint) = match self {
            Self::Ascii => ("\\- ", '|', ['\\', '_', '/'], '_'),
            Self::Unicode => ("└ ", '│', ['└', '─', '┘'], '┬'),
            Self::Rounded => ("╰ ", '│', ['╰', '─', '╯'], '┬'),
            Self::Double => ("╚ ", '║', ['╚', '═', '╝'], '╦'),
            Self::Bold => ("┗ ", '┃', ['┗', '━', '┛'], '┳'),
        };

        GlyphSet {
            corner: corner.to_string(),
            straight,
            range: RangeGlyphs::new(open, fill, close),
            joint,
        }
    }
}

impl FromStr for Preset {
    type Err = GlyphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GlyphError::UnknownPreset(s.to_string()))
    }
}

impl TryFrom<String> for Preset {
    type Error = GlyphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
