//! Cover-fit cropping: the centered source region matching a target aspect ratio

/// Source-image region in pixel coordinates, possibly fractional
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    /// Left edge in the source image
    pub x: f64,
    /// Top edge in the source image
    pub y: f64,
    /// Cropped width
    pub width: f64,
    /// Cropped height
    pub height: f64,
}

impl CropRect {
    /// Whole-pixel region covering this crop, clamped to the image bounds
    ///
    /// Returns `(x, y, width, height)` with width and height at least one pixel.
    pub fn to_pixel_bounds(&self, image_width: u32, image_height: u32) -> (u32, u32, u32, u32) {
        let max_x = f64::from(image_width.saturating_sub(1));
        let max_y = f64::from(image_height.saturating_sub(1));

        let x0 = self.x.round().clamp(0.0, max_x);
        let y0 = self.y.round().clamp(0.0, max_y);
        let x1 = (self.x + self.width)
            .round()
            .clamp(x0 + 1.0, f64::from(image_width.max(1)));
        let y1 = (self.y + self.height)
            .round()
            .clamp(y0 + 1.0, f64::from(image_height.max(1)));

        (x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32)
    }
}

/// Centered crop of an `image_width x image_height` source whose aspect ratio
/// equals `target_width / target_height`
///
/// A source relatively wider than the target keeps its full height and loses
/// equal strips left and right; otherwise it keeps its full width and loses
/// equal strips top and bottom. Returns `None` if any dimension is not a
/// positive finite number.
pub fn cover_fit_crop(
    image_width: f64,
    image_height: f64,
    target_width: f64,
    target_height: f64,
) -> Option<CropRect> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !(valid(image_width) && valid(image_height) && valid(target_width) && valid(target_height))
    {
        return None;
    }

    let image_ratio = image_width / image_height;
    let target_ratio = target_width / target_height;

    let crop = if image_ratio > target_ratio {
        let width = image_height * target_ratio;
        CropRect {
            x: (image_width - width) / 2.0,
            y: 0.0,
            width,
            height: image_height,
        }
    } else {
        let height = image_width / target_ratio;
        CropRect {
            x: 0.0,
            y: (image_height - height) / 2.0,
            width: image_width,
            height,
        }
    };

    Some(crop)
}
