//! Ring layout with circular thumbnails

use crate::collage::canvas::CanvasSpec;
use crate::io::configuration::{CIRCLE_ITEM_FACTOR, CIRCLE_RADIUS_FACTOR};
use crate::layout::placement::{ClipShape, Placement, Rect};
use std::f64::consts::TAU;

/// Angle of item `index` out of `count`, radians
///
/// Angle zero points east. Evaluated in y-down screen space, so angles grow
/// clockwise on screen.
pub const fn ring_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 / count as f64 * TAU
}

/// Radius of the ring item centers sit on
pub fn ring_radius(canvas: &CanvasSpec) -> f64 {
    canvas.min_side() * CIRCLE_RADIUS_FACTOR
}

/// Place `count` circular items evenly around the canvas center
pub fn circle_layout(count: usize, canvas: &CanvasSpec) -> Vec<Placement> {
    let (cx, cy) = canvas.center();
    let radius = ring_radius(canvas);
    let side = canvas.min_side() * CIRCLE_ITEM_FACTOR;

    (0..count)
        .map(|index| {
            let angle = ring_angle(index, count);
            let target = Rect::from_center(
                radius.mul_add(angle.cos(), cx),
                radius.mul_add(angle.sin(), cy),
                side,
                side,
            );
            Placement {
                clip: ClipShape::Circle,
                ..Placement::plain(index, target)
            }
        })
        .collect()
}
