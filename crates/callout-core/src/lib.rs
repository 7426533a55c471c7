//! Callout Core Types and Definitions
//!
//! This crate provides the foundational types for callout diagrams, which
//! connect comments to the parts of a command line they explain. It includes:
//!
//! - **Ranges**: Character spans and point markers ([`range::Range`])
//! - **Explanations**: Commands with their comments ([`explanation`] module)
//! - **Glyphs**: Glyph sets and named presets ([`glyph`] module)
//! - **Config**: Per-render settings ([`config::RenderConfig`])
//! - **Draw**: The character canvas diagrams are drawn on ([`draw`] module)

pub mod config;
pub mod draw;
pub mod explanation;
pub mod glyph;
pub mod range;
