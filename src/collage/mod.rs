//! Collage data model and the end-to-end render
//!
//! This module contains:
//! - Canvas sizing from aspect ratios
//! - The owned, capacity-limited image collection
//! - Render configuration values
//! - The pipeline tying layout and compositing together

/// Aspect ratios and canvas dimensions
pub mod canvas;
/// Image assets and the ordered collection
pub mod collection;
/// Colors, export formats, quality and render configuration
pub mod config;
/// Layout plus compositing for a whole collection
pub mod pipeline;

pub use canvas::{AspectRatio, CanvasSpec};
