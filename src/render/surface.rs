//! Raster surface the compositor draws into

use crate::collage::canvas::CanvasSpec;
use crate::collage::config::Color;
use crate::io::error::{Result, render_error};
use image::{Rgba, RgbaImage};
use tiny_skia::Pixmap;

/// Convert a straight color into the backend color type
pub(crate) fn skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Premultiplied RGBA8 raster of a fixed size
///
/// Owned by the render call that creates it; handed back to the caller for
/// preview and export.
#[derive(Clone)]
pub struct Surface {
    pixmap: Pixmap,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Surface {
    /// Allocate a surface of the canvas size filled with `background`
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel buffer cannot be allocated
    pub fn new(canvas: &CanvasSpec, background: Color) -> Result<Self> {
        let mut pixmap = Pixmap::new(canvas.width, canvas.height).ok_or_else(|| {
            render_error(
                "surface allocation",
                &format!("cannot allocate {}x{} surface", canvas.width, canvas.height),
            )
        })?;
        pixmap.fill(skia_color(background));
        Ok(Self { pixmap })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA bytes, row-major
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight RGBA value at a pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|px| {
            let c = px.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Number of pixels whose value differs from `color`
    pub fn count_pixels_unlike(&self, color: Color) -> usize {
        let reference = tiny_skia::ColorU8::from_rgba(color.r, color.g, color.b, color.a)
            .premultiply();
        self.pixmap
            .pixels()
            .iter()
            .filter(|&&px| px != reference)
            .count()
    }

    /// Copy out as a straight-alpha image buffer for encoding
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width(), self.height());
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }
        img
    }

    pub(crate) const fn pixmap_mut(&mut self) -> &mut Pixmap {
        &mut self.pixmap
    }
}
