//! Pseudo-masonry layout: a grid with random jitter, tilt, shadow and frame
//!
//! Every call draws fresh offsets and angles from the supplied generator, so two
//! layouts of the same collection differ unless the generator is seeded
//! identically. The variety between re-renders is intentional.

use crate::collage::canvas::CanvasSpec;
use crate::collage::config::Color;
use crate::io::configuration::{
    BORDER_WIDTH, MASONRY_ITEM_FACTOR, MASONRY_JITTER_SPAN, MASONRY_MAX_ROTATION, SHADOW_ALPHA,
    SHADOW_BLUR, SHADOW_OFFSET,
};
use crate::layout::grid::GridDimensions;
use crate::layout::placement::{Border, DropShadow, Placement, Rect};
use rand::Rng;

/// Shadow cast by every masonry item at the canvas scale
pub fn masonry_shadow(canvas: &CanvasSpec) -> DropShadow {
    let scale = canvas.scale();
    DropShadow {
        offset_x: SHADOW_OFFSET * scale,
        offset_y: SHADOW_OFFSET * scale,
        blur: SHADOW_BLUR * scale,
        color: Color::rgba(0, 0, 0, SHADOW_ALPHA),
    }
}

/// White frame drawn around every masonry item at the canvas scale
pub fn masonry_border(canvas: &CanvasSpec) -> Border {
    Border {
        width: BORDER_WIDTH * canvas.scale(),
        color: Color::WHITE,
    }
}

/// Uniform sample in `[-half_span, half_span)`
fn centered_sample<R: Rng + ?Sized>(rng: &mut R, span: f64) -> f64 {
    (rng.random::<f64>() - 0.5) * span
}

/// Jittered, tilted placements for `count` items
///
/// Centers move by up to 10% of the cell size on each axis, rotations stay within
/// `MASONRY_MAX_ROTATION` radians and items cover 95% of their cell.
pub fn masonry_layout<R: Rng + ?Sized>(
    count: usize,
    canvas: &CanvasSpec,
    rng: &mut R,
) -> Vec<Placement> {
    let Some(dims) = GridDimensions::for_count(count) else {
        return Vec::new();
    };
    let shadow = masonry_shadow(canvas);
    let border = masonry_border(canvas);

    (0..count)
        .map(|index| {
            let cell = dims.cell_rect(canvas, index);
            let (cx, cy) = cell.center();

            // Sample order is fixed (x, y, rotation) so a seed reproduces the layout
            let offset_x = centered_sample(rng, cell.width * MASONRY_JITTER_SPAN);
            let offset_y = centered_sample(rng, cell.height * MASONRY_JITTER_SPAN);
            let rotation = centered_sample(rng, 2.0 * MASONRY_MAX_ROTATION);

            let target = Rect::from_center(
                cx + offset_x,
                cy + offset_y,
                cell.width * MASONRY_ITEM_FACTOR,
                cell.height * MASONRY_ITEM_FACTOR,
            );

            Placement {
                rotation,
                shadow: Some(shadow),
                border: Some(border),
                ..Placement::plain(index, target)
            }
        })
        .collect()
}
