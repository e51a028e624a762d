//! Painter's-algorithm compositor: crop, transform, clip and draw each item

use crate::collage::canvas::CanvasSpec;
use crate::collage::collection::ImageAsset;
use crate::collage::config::Color;
use crate::io::error::{Result, render_error};
use crate::layout::placement::{ClipShape, Placement};
use crate::render::crop::cover_fit_crop;
use crate::render::shadow::draw_drop_shadow;
use crate::render::surface::{Surface, skia_color};
use image::imageops::{self, FilterType};
use tiny_skia::{
    ColorU8, FillRule, LineJoin, Mask, Paint, Path, PathBuilder, Pixmap, PixmapPaint, Stroke,
    Transform,
};

/// Resampling filter used when scaling crops to their target size
const RESAMPLE_FILTER: FilterType = FilterType::Triangle;

/// Draws placements and their images onto a fresh surface
#[derive(Debug, Clone, Copy)]
pub struct Compositor {
    canvas: CanvasSpec,
    background: Color,
}

impl Compositor {
    /// Create a compositor for one canvas and background
    pub const fn new(canvas: CanvasSpec, background: Color) -> Self {
        Self { canvas, background }
    }

    /// Fill a new surface with the background and draw every item in order
    ///
    /// Later items cover earlier ones. An empty sequence yields a surface of
    /// solid background.
    ///
    /// # Errors
    ///
    /// Returns an error if a placement has an empty target or the surface or a
    /// per-item buffer cannot be allocated
    #[tracing::instrument(skip_all, fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn render<'a, I>(&self, items: I) -> Result<Surface>
    where
        I: IntoIterator<Item = (&'a Placement, &'a ImageAsset)>,
    {
        let mut surface = Surface::new(&self.canvas, self.background)?;
        let mut drawn = 0usize;
        for (placement, asset) in items {
            self.draw_item(&mut surface, placement, asset)?;
            drawn += 1;
        }
        tracing::debug!(drawn, "composited items");
        Ok(surface)
    }

    /// Draw a single item onto `surface`
    ///
    /// Steps: move to the target center, rotate, clip, shadow, image, border.
    /// Nothing carries over to the next item.
    ///
    /// # Errors
    ///
    /// Returns an error if the target has no area or an intermediate buffer
    /// cannot be allocated
    pub fn draw_item(
        &self,
        surface: &mut Surface,
        placement: &Placement,
        asset: &ImageAsset,
    ) -> Result<()> {
        let target = placement.target;
        if !target.is_positive() {
            return Err(render_error(
                "placement",
                &format!(
                    "item {} has empty target {}x{}",
                    placement.index, target.width, target.height
                ),
            ));
        }

        let (cx, cy) = target.center();
        let (w, h) = (target.width as f32, target.height as f32);
        let centered = Transform::from_translate(cx as f32, cy as f32)
            .pre_concat(Transform::from_rotate(placement.rotation.to_degrees() as f32));

        let mask = match placement.clip {
            ClipShape::None => None,
            ClipShape::Circle => Some(self.circle_mask(w.min(h) / 2.0, centered)?),
        };

        if let Some(shadow) = &placement.shadow {
            // The frame casts a shadow too, so the silhouette grows by half its width
            let grow = placement.border.map_or(0.0, |b| b.width as f32 / 2.0);
            let silhouette = match placement.clip {
                ClipShape::None => local_rect_path(w + 2.0 * grow, h + 2.0 * grow),
                ClipShape::Circle => PathBuilder::from_circle(0.0, 0.0, w.min(h) / 2.0),
            };
            if let Some(silhouette) = silhouette {
                draw_drop_shadow(
                    surface.pixmap_mut(),
                    &silhouette,
                    centered,
                    shadow,
                    mask.as_ref(),
                )?;
            }
        }

        let tile = prepare_tile(asset, target.width, target.height)?;
        let scale = Transform::from_scale(w / tile.width() as f32, h / tile.height() as f32);
        let image_transform = centered
            .pre_concat(Transform::from_translate(-w / 2.0, -h / 2.0))
            .pre_concat(scale);
        let paint = PixmapPaint {
            quality: tiny_skia::FilterQuality::Bilinear,
            ..PixmapPaint::default()
        };
        surface
            .pixmap_mut()
            .draw_pixmap(0, 0, tile.as_ref(), &paint, image_transform, mask.as_ref());

        if let Some(border) = &placement.border {
            if let Some(frame) = local_rect_path(w, h) {
                let mut stroke_paint = Paint::default();
                stroke_paint.set_color(skia_color(border.color));
                stroke_paint.anti_alias = true;
                let stroke = Stroke {
                    width: border.width as f32,
                    line_join: LineJoin::Miter,
                    ..Stroke::default()
                };
                surface.pixmap_mut().stroke_path(
                    &frame,
                    &stroke_paint,
                    &stroke,
                    centered,
                    mask.as_ref(),
                );
            }
        }

        tracing::trace!(
            index = placement.index,
            source_w = asset.width(),
            source_h = asset.height(),
            "drew item"
        );
        Ok(())
    }

    fn circle_mask(&self, radius: f32, transform: Transform) -> Result<Mask> {
        let mut mask = Mask::new(self.canvas.width, self.canvas.height).ok_or_else(|| {
            render_error(
                "clip mask",
                &format!(
                    "cannot allocate {}x{} mask",
                    self.canvas.width, self.canvas.height
                ),
            )
        })?;
        if let Some(circle) = PathBuilder::from_circle(0.0, 0.0, radius) {
            mask.fill_path(&circle, FillRule::Winding, true, transform);
        }
        Ok(mask)
    }
}

/// Rectangle of the given size centered on the local origin
fn local_rect_path(width: f32, height: f32) -> Option<Path> {
    tiny_skia::Rect::from_xywh(-width / 2.0, -height / 2.0, width, height)
        .map(PathBuilder::from_rect)
}

/// Cover-fit crop `asset` and resample it to the whole-pixel size of the target
///
/// # Errors
///
/// Returns an error if the image or target is degenerate or the tile cannot be
/// allocated
pub fn prepare_tile(asset: &ImageAsset, target_width: f64, target_height: f64) -> Result<Pixmap> {
    let crop = cover_fit_crop(
        f64::from(asset.width()),
        f64::from(asset.height()),
        target_width,
        target_height,
    )
    .ok_or_else(|| {
        render_error(
            "cover-fit crop",
            &format!(
                "cannot fit {}x{} image into {target_width}x{target_height}",
                asset.width(),
                asset.height()
            ),
        )
    })?;

    let (x, y, crop_w, crop_h) = crop.to_pixel_bounds(asset.width(), asset.height());
    let tile_w = target_width.round().max(1.0) as u32;
    let tile_h = target_height.round().max(1.0) as u32;

    let cropped = imageops::crop_imm(asset.image(), x, y, crop_w, crop_h).to_image();
    let resized = imageops::resize(&cropped, tile_w, tile_h, RESAMPLE_FILTER);

    let mut tile = Pixmap::new(tile_w, tile_h).ok_or_else(|| {
        render_error(
            "tile allocation",
            &format!("cannot allocate {tile_w}x{tile_h} tile"),
        )
    })?;
    for (dst, src) in tile.pixels_mut().iter_mut().zip(resized.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }

    Ok(tile)
}
