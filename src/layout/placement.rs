//! Placement instructions produced by the layout engine
//!
//! Coordinates are canvas pixels with the origin at the top-left corner and the
//! y axis pointing down. Rotations are in radians and turn clockwise on screen.

use crate::collage::config::Color;
use crate::io::error::{CollageError, Result, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Axis-aligned rectangle in canvas space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal extent
    pub width: f64,
    /// Vertical extent
    pub height: f64,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle of the given size centered on a point
    pub const fn from_center(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Center point
    pub const fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Width divided by height
    pub const fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Shrink every side by `amount`
    pub const fn inset(&self, amount: f64) -> Self {
        Self::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }

    /// Whether both extents are strictly positive
    pub const fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Available placement algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutStrategy {
    /// Uniform padded grid
    #[default]
    Grid,
    /// Circular thumbnails evenly spaced on a ring
    Circle,
    /// Grid with random jitter, tilt, shadow and white frame
    Masonry,
}

impl LayoutStrategy {
    /// All strategies in declaration order
    pub const ALL: [Self; 3] = [Self::Grid, Self::Circle, Self::Masonry];

    /// Whether two layouts with identical inputs can differ
    pub const fn is_randomized(self) -> bool {
        matches!(self, Self::Masonry)
    }
}

impl fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grid => "grid",
            Self::Circle => "circle",
            Self::Masonry => "masonry",
        };
        f.write_str(name)
    }
}

impl FromStr for LayoutStrategy {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "circle" => Ok(Self::Circle),
            "masonry" => Ok(Self::Masonry),
            _ => Err(invalid_parameter(
                "layout",
                &s,
                &"expected grid, circle or masonry",
            )),
        }
    }
}

/// Region the image is restricted to while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipShape {
    /// Draw the full target rectangle
    #[default]
    None,
    /// Draw only the circle inscribed in the target rectangle
    Circle,
}

/// Soft shadow drawn beneath an item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropShadow {
    /// Horizontal displacement (screen space, positive is right)
    pub offset_x: f64,
    /// Vertical displacement (screen space, positive is down)
    pub offset_y: f64,
    /// Blur extent; the gaussian standard deviation is half of it
    pub blur: f64,
    /// Shadow color including opacity
    pub color: Color,
}

/// Solid frame stroked along the target rectangle after the image
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    /// Stroke width, centered on the rectangle edge
    pub width: f64,
    /// Stroke color
    pub color: Color,
}

/// Geometric instruction for drawing one collage item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Position of the item in the collection
    pub index: usize,
    /// Rectangle the cropped image fills, before rotation
    pub target: Rect,
    /// Clockwise rotation about the target center, radians
    pub rotation: f64,
    /// Clip applied to the drawn image
    pub clip: ClipShape,
    /// Optional shadow beneath the image
    pub shadow: Option<DropShadow>,
    /// Optional frame around the image
    pub border: Option<Border>,
}

impl Placement {
    /// Plain placement without rotation, clip or effects
    pub const fn plain(index: usize, target: Rect) -> Self {
        Self {
            index,
            target,
            rotation: 0.0,
            clip: ClipShape::None,
            shadow: None,
            border: None,
        }
    }
}
