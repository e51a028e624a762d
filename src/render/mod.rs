//! Rasterization of placements onto a surface

/// Painter's-algorithm compositor
pub mod compositor;
/// Cover-fit crop computation
pub mod crop;
/// Gaussian drop shadows
pub mod shadow;
/// Owned raster surface
pub mod surface;
