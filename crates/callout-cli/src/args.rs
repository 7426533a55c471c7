//! Command-line argument definitions for the callout CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the inputs and the output, override
//! glyphs and width from the configuration file, and control logging.

use std::path::PathBuf;

use clap::Parser;

/// Draw diagrams that explain annotated command lines
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Explanation files, read in order; standard input when none are given
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Write the diagrams to this file instead of standard output
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Target width of the diagrams in characters
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Glyph preset (ascii, unicode, rounded, double, bold)
    #[arg(short, long, conflicts_with = "unicode")]
    pub preset: Option<String>,

    /// Shorthand for `--preset unicode`
    #[arg(short, long)]
    pub unicode: bool,

    /// Corner glyph placed in front of each comment
    #[arg(short, long, allow_hyphen_values = true)]
    pub corner: Option<String>,

    /// Glyph of the vertical connectors
    #[arg(short, long, allow_hyphen_values = true)]
    pub straight: Option<String>,

    /// Bracket glyphs: opening, fill and closing character
    #[arg(short, long, allow_hyphen_values = true)]
    pub ranges: Option<String>,

    /// Glyph where a connector leaves a bracket
    #[arg(short, long, allow_hyphen_values = true)]
    pub joint: Option<String>,

    /// Fail instead of warning when markers or comments are lost
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
