//! Photo collage composition: layout, cover-fit cropping and compositing
//!
//! A collection of decoded photos is placed on a canvas by one of three layout
//! strategies (grid, circle, masonry), each photo is cropped to fill its slot
//! without distortion, and everything is painted in order onto one raster
//! surface that can be previewed or encoded for export.

#![forbid(unsafe_code)]

/// Canvas sizing, the image collection, render settings and the render pipeline
pub mod collage;
/// Input/output operations, configuration and error handling
pub mod io;
/// Placement computation for the grid, circle and masonry strategies
pub mod layout;
/// Cover-fit cropping, shadows and the raster compositor
pub mod render;

pub use collage::collection::{Collection, ImageAsset};
pub use collage::config::RenderConfig;
pub use collage::pipeline::{RenderedCollage, render_collection};
pub use io::error::{CollageError, Result};
pub use layout::engine::{LayoutEngine, compute_layout};
pub use layout::placement::{LayoutStrategy, Placement};
pub use render::compositor::Compositor;
pub use render::surface::Surface;
