//! End-to-end render of a collection: canvas sizing, layout, compositing

use crate::collage::canvas::CanvasSpec;
use crate::collage::collection::Collection;
use crate::collage::config::RenderConfig;
use crate::io::error::Result;
use crate::layout::engine::LayoutEngine;
use crate::layout::placement::Placement;
use crate::render::compositor::Compositor;
use crate::render::surface::Surface;

/// Result of one render
#[derive(Debug, Clone)]
pub struct RenderedCollage {
    /// Canvas the collage was drawn at
    pub canvas: CanvasSpec,
    /// Placements in draw order
    pub placements: Vec<Placement>,
    /// Finished raster
    pub surface: Surface,
}

/// Render the whole collection with `config` at `base_width`
///
/// Returns `Ok(None)` without drawing anything when the collection is empty.
/// Masonry layouts draw their randomness from `engine`.
///
/// # Errors
///
/// Returns an error if the canvas size is invalid or rasterization fails
#[tracing::instrument(skip(collection, engine), fields(items = collection.len()))]
pub fn render_collection(
    collection: &Collection,
    config: &RenderConfig,
    base_width: u32,
    engine: &mut LayoutEngine,
) -> Result<Option<RenderedCollage>> {
    if collection.is_empty() {
        tracing::debug!("empty collection, nothing to render");
        return Ok(None);
    }

    let canvas = CanvasSpec::from_aspect(base_width, config.aspect)?;
    let placements = engine.compute(collection.len(), &canvas, config.strategy)?;

    let surface =
        Compositor::new(canvas, config.background).render(placements.iter().zip(collection.assets()))?;

    Ok(Some(RenderedCollage {
        canvas,
        placements,
        surface,
    }))
}
