//! Configuration types for callout rendering.
//!
//! This module provides configuration structures that control how input is
//! read and how diagrams are drawn. All types implement
//! [`serde::Deserialize`] for loading from external sources such as TOML
//! files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining layout, style and input settings.
//! - [`LayoutConfig`] - Target width of the diagram.
//! - [`StyleConfig`] - Glyph preset and per-glyph overrides.
//! - [`InputConfig`] - Ignored line prefixes and strict parsing.
//!
//! # Example
//!
//! ```
//! # use callout::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! let render = config.render_config().unwrap();
//! assert_eq!(render.width(), 72);
//! ```

use serde::Deserialize;

use callout_core::{
    config::{DEFAULT_WIDTH, RenderConfig},
    glyph::{GlyphError, Preset},
};
use callout_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Input configuration section.
    #[serde(default)]
    input: InputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, style: StyleConfig, input: InputConfig) -> Self {
        Self {
            layout,
            style,
            input,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the layout configuration for modification.
    pub fn layout_mut(&mut self) -> &mut LayoutConfig {
        &mut self.layout
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the style configuration for modification.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }

    /// Returns the input configuration.
    pub fn input(&self) -> &InputConfig {
        &self.input
    }

    /// Returns the input configuration for modification.
    pub fn input_mut(&mut self) -> &mut InputConfig {
        &mut self.input
    }

    /// Resolves the settings the renderer needs.
    ///
    /// # Errors
    ///
    /// Returns a [`GlyphError`] if a glyph override is malformed.
    pub fn render_config(&self) -> Result<RenderConfig, GlyphError> {
        let glyphs = self.style.glyphs()?;
        Ok(RenderConfig::new(self.layout.width, glyphs))
    }

    /// Returns the settings the parser needs.
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new(self.input.ignore_prefixes.clone(), self.input.strict)
    }
}

/// Diagram layout settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    /// Target width in characters; widened when a command does not fit.
    #[serde(default = "default_width")]
    width: usize,
}

impl LayoutConfig {
    /// Creates a layout configuration with the given target width.
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Returns the target width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Sets the target width.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

/// Glyph settings.
///
/// The preset supplies every glyph; each override replaces one group on top
/// of it. Overrides stay strings until [`AppConfig::render_config`] checks
/// them.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    preset: Option<Preset>,
    #[serde(default)]
    corner: Option<String>,
    #[serde(default)]
    straight: Option<String>,
    #[serde(default)]
    range: Option<String>,
    #[serde(default)]
    joint: Option<String>,
}

impl StyleConfig {
    /// Returns the configured preset, if any.
    pub fn preset(&self) -> Option<Preset> {
        self.preset
    }

    /// Selects a preset.
    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = Some(preset);
    }

    /// Overrides the corner glyph.
    pub fn set_corner(&mut self, corner: impl Into<String>) {
        self.corner = Some(corner.into());
    }

    /// Overrides the straight glyph.
    pub fn set_straight(&mut self, straight: impl Into<String>) {
        self.straight = Some(straight.into());
    }

    /// Overrides the range glyphs.
    pub fn set_range(&mut self, range: impl Into<String>) {
        self.range = Some(range.into());
    }

    /// Overrides the joint glyph.
    pub fn set_joint(&mut self, joint: impl Into<String>) {
        self.joint = Some(joint.into());
    }

    fn glyphs(&self) -> Result<callout_core::glyph::GlyphSet, GlyphError> {
        let mut glyphs = self.preset.unwrap_or_default().glyphs();
        if let Some(corner) = &self.corner {
            glyphs = glyphs.with_corner(corner)?;
        }
        if let Some(straight) = &self.straight {
            glyphs = glyphs.with_straight(straight)?;
        }
        if let Some(range) = &self.range {
            glyphs = glyphs.with_range(range)?;
        }
        if let Some(joint) = &self.joint {
            glyphs = glyphs.with_joint(joint)?;
        }
        Ok(glyphs)
    }
}

/// Input settings.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Lines starting with one of these characters are ignored.
    #[serde(default = "default_ignore_prefixes")]
    ignore_prefixes: Vec<char>,

    /// Treat lossy input as an error.
    #[serde(default)]
    strict: bool,
}

impl InputConfig {
    /// Returns the ignored line prefixes.
    pub fn ignore_prefixes(&self) -> &[char] {
        &self.ignore_prefixes
    }

    /// Returns `true` if lossy input is an error.
    pub fn strict(&self) -> bool {
        self.strict
    }

    /// Switches strict parsing on or off.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            ignore_prefixes: default_ignore_prefixes(),
            strict: false,
        }
    }
}

fn default_ignore_prefixes() -> Vec<char> {
    ParseConfig::DEFAULT_IGNORE_PREFIXES.to_vec()
}
