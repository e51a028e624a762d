//! Layout engine producing one placement per collage item

/// Ring layout with circular clips
pub mod circle;
/// Strategy dispatch and the seeded engine
pub mod engine;
/// Uniform padded grid
pub mod grid;
/// Jittered, tilted grid with shadows and frames
pub mod masonry;
/// Placement types shared by every strategy
pub mod placement;

pub use placement::{Placement, Rect};
