//! Drawing primitives for text diagrams.
//!
//! Diagrams are drawn onto a [`Canvas`], a grid of fixed-width character
//! rows that grows downwards as content is added.

mod canvas;

pub use canvas::Canvas;
