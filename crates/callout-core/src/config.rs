//! Render configuration handed to the diagram renderer.

use crate::glyph::GlyphSet;

/// Default target width of a rendered diagram in characters.
pub const DEFAULT_WIDTH: usize = 72;

/// Immutable settings for one render call.
///
/// The width is a target: the renderer widens it when the command or its
/// ranges would not otherwise fit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    width: usize,
    glyphs: GlyphSet,
}

impl RenderConfig {
    /// Creates a render configuration.
    pub fn new(width: usize, glyphs: GlyphSet) -> Self {
        Self { width, glyphs }
    }

    /// Returns a copy with a different target width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns the target width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the glyphs to draw with.
    pub fn glyphs(&self) -> &GlyphSet {
        &self.glyphs
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, GlyphSet::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::Preset;

    #[test]
    fn test_default_render_config() {
        let config = RenderConfig::default();

        assert_eq!(config.width(), 72);
        assert_eq!(config.glyphs(), &Preset::Ascii.glyphs());
    }

    #[test]
    fn test_with_width() {
        let config = RenderConfig::new(40, Preset::Bold.glyphs()).with_width(100);

        assert_eq!(config.width(), 100);
        assert_eq!(config.glyphs().joint(), '┳');
    }
}
