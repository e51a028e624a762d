//! Soft drop shadows: silhouette fill, separable gaussian blur, composite

use crate::io::error::{Result, invalid_parameter, render_error};
use crate::layout::placement::DropShadow;
use crate::render::surface::skia_color;
use tiny_skia::{FillRule, IntSize, Mask, Paint, Path, Pixmap, PixmapPaint, Transform};

/// Gaussian standard deviation for a blur extent
///
/// A blur of `b` spreads the edge over roughly `b` pixels, i.e. `sigma = b / 2`.
pub fn blur_sigma(blur: f64) -> f32 {
    (blur / 2.0).max(0.0) as f32
}

/// Kernel radius covering three standard deviations
pub fn blur_radius(sigma: f32) -> u32 {
    if sigma <= 0.0 {
        0
    } else {
        (sigma * 3.0).ceil() as u32
    }
}

/// Blur a premultiplied RGBA8 buffer with a separable gaussian
///
/// Samples beyond the edges repeat the edge pixel. A radius of zero returns the
/// input unchanged.
///
/// # Errors
///
/// Returns an error if `src` does not hold `width * height` pixels or `sigma`
/// is not a positive finite number while `radius` is non-zero
pub fn blur_rgba8_premul(
    src: &[u8],
    width: u32,
    height: u32,
    radius: u32,
    sigma: f32,
) -> Result<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| render_error("shadow blur", &"buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(render_error(
            "shadow blur",
            &format!("expected {expected_len} bytes, got {}", src.len()),
        ));
    }
    if radius == 0 {
        return Ok(src.to_vec());
    }

    let kernel = gaussian_kernel_q16(radius, sigma)?;
    let mut tmp = vec![0u8; expected_len];
    let mut out = vec![0u8; expected_len];

    let (w, h) = (width as usize, height as usize);
    convolve(src, &mut tmp, w, h, &kernel, true);
    convolve(&tmp, &mut out, w, h, &kernel, false);
    Ok(out)
}

// Weights are fixed point with 16 fractional bits and sum to exactly 1.0
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> Result<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(invalid_parameter("sigma", &sigma, &"blur sigma must be > 0"));
    }

    let r = radius as i64;
    let denom = 2.0 * f64::from(sigma) * f64::from(sigma);
    let weights_f: Vec<f64> = (-r..=r)
        .map(|i| {
            let x = i as f64;
            (-x * x / denom).exp()
        })
        .collect();
    let sum: f64 = weights_f.iter().sum();
    if sum <= 0.0 {
        return Err(render_error("shadow blur", &"gaussian kernel sum is zero"));
    }

    let mut weights: Vec<u32> = weights_f
        .iter()
        .map(|wf| ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as u32)
        .collect();

    // Push the rounding error into the center tap
    let acc: i64 = weights.iter().map(|&w| i64::from(w)).sum();
    let delta = 65536 - acc;
    if delta != 0 {
        let mid = weights.len() / 2;
        if let Some(center) = weights.get_mut(mid) {
            *center = (i64::from(*center) + delta).clamp(0, 65536) as u32;
        }
    }

    Ok(weights)
}

fn convolve(src: &[u8], dst: &mut [u8], w: usize, h: usize, kernel: &[u32], horizontal: bool) {
    let radius = (kernel.len() / 2) as isize;
    let (len, stride) = if horizontal { (w, 1) } else { (h, w) };
    let last = len as isize - 1;

    for (i, out_px) in dst.chunks_exact_mut(4).enumerate() {
        let (x, y) = (i % w, i / w);
        let (along, line_start) = if horizontal {
            (x, y * w)
        } else {
            (y, x)
        };

        let mut acc = [0u64; 4];
        for (k, &weight) in kernel.iter().enumerate() {
            let pos = (along as isize + k as isize - radius).clamp(0, last) as usize;
            let idx = (line_start + pos * stride) * 4;
            if let Some(px) = src.get(idx..idx + 4) {
                for (a, &c) in acc.iter_mut().zip(px) {
                    *a += u64::from(weight) * u64::from(c);
                }
            }
        }

        for (o, a) in out_px.iter_mut().zip(acc) {
            *o = q16_to_u8(a);
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    ((acc + 32768) >> 16).min(255) as u8
}

/// Draw the blurred, offset silhouette of `shape` beneath upcoming draws
///
/// `shape` is in local item space and mapped to the canvas by `transform`. The
/// shadow is rendered into a layer just large enough for the blurred shape,
/// then composited onto `target` through the optional clip `mask`.
///
/// # Errors
///
/// Returns an error if the layer cannot be allocated or blurred
pub fn draw_drop_shadow(
    target: &mut Pixmap,
    shape: &Path,
    transform: Transform,
    shadow: &DropShadow,
    mask: Option<&Mask>,
) -> Result<()> {
    let offset = Transform::from_translate(shadow.offset_x as f32, shadow.offset_y as f32);
    let Some(moved) = shape.clone().transform(offset.pre_concat(transform)) else {
        return Ok(());
    };

    let sigma = blur_sigma(shadow.blur);
    let radius = blur_radius(sigma);
    let margin = radius as f32 + 1.0;

    let bounds = moved.bounds();
    let left = (bounds.left() - margin).floor();
    let top = (bounds.top() - margin).floor();
    let layer_w = ((bounds.right() + margin).ceil() - left).max(1.0) as u32;
    let layer_h = ((bounds.bottom() + margin).ceil() - top).max(1.0) as u32;

    let mut layer = Pixmap::new(layer_w, layer_h).ok_or_else(|| {
        render_error(
            "shadow layer",
            &format!("cannot allocate {layer_w}x{layer_h} layer"),
        )
    })?;

    let mut paint = Paint::default();
    paint.set_color(skia_color(shadow.color));
    paint.anti_alias = true;
    layer.fill_path(
        &moved,
        &paint,
        FillRule::Winding,
        Transform::from_translate(-left, -top),
        None,
    );

    let blurred = blur_rgba8_premul(layer.data(), layer_w, layer_h, radius, sigma.max(f32::EPSILON))?;
    let size = IntSize::from_wh(layer_w, layer_h)
        .ok_or_else(|| render_error("shadow layer", &"zero-sized layer"))?;
    let layer = Pixmap::from_vec(blurred, size)
        .ok_or_else(|| render_error("shadow layer", &"blurred buffer has the wrong size"))?;

    target.draw_pixmap(
        left as i32,
        top as i32,
        layer.as_ref(),
        &PixmapPaint::default(),
        Transform::identity(),
        mask,
    );

    tracing::trace!(left, top, layer_w, layer_h, radius, "drop shadow");
    Ok(())
}
