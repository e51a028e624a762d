//! Canvas sizing from a "W:H" aspect ratio and a base width

use crate::io::configuration::BASE_WIDTH;
use crate::io::error::{CollageError, Result, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// Width-to-height ratio with positive integer components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    width: u32,
    height: u32,
}

impl AspectRatio {
    /// Square canvas
    pub const SQUARE: Self = Self {
        width: 1,
        height: 1,
    };

    /// Create a ratio, rejecting zero components
    ///
    /// # Errors
    ///
    /// Returns an error if either component is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "aspect",
                &format!("{width}:{height}"),
                &"both ratio components must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Horizontal component
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Vertical component
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for AspectRatio {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| invalid_parameter("aspect", &s, &"expected the form W:H"))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|e| invalid_parameter("aspect", &s, &e))
        };

        Self::new(parse(w)?, parse(h)?)
    }
}

/// Pixel dimensions of the raster surface for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Surface width in pixels
    pub width: u32,
    /// Surface height in pixels
    pub height: u32,
}

impl CanvasSpec {
    /// Create a canvas with explicit dimensions
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(invalid_parameter(
                "canvas",
                &format!("{width}x{height}"),
                &"canvas dimensions must be positive",
            ));
        }
        Ok(Self { width, height })
    }

    /// Derive the canvas for an aspect ratio at the given base width
    ///
    /// Height is `base_width * h / w`, truncated to whole pixels like a raster
    /// surface assignment would.
    ///
    /// # Errors
    ///
    /// Returns an error if the base width is zero or the ratio is so flat that
    /// the height rounds down to zero
    pub fn from_aspect(base_width: u32, aspect: AspectRatio) -> Result<Self> {
        let height = u64::from(base_width) * u64::from(aspect.height) / u64::from(aspect.width);
        let height = u32::try_from(height).map_err(|_overflow| {
            invalid_parameter("aspect", &aspect, &"canvas height does not fit in u32")
        })?;
        Self::new(base_width, height)
    }

    /// Width as a float for geometry
    pub fn width_f64(&self) -> f64 {
        f64::from(self.width)
    }

    /// Height as a float for geometry
    pub fn height_f64(&self) -> f64 {
        f64::from(self.height)
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> f64 {
        self.width_f64().min(self.height_f64())
    }

    /// Canvas center point
    pub fn center(&self) -> (f64, f64) {
        (self.width_f64() / 2.0, self.height_f64() / 2.0)
    }

    /// Factor applied to pixel constants defined at [`BASE_WIDTH`]
    pub fn scale(&self) -> f64 {
        self.width_f64() / f64::from(BASE_WIDTH)
    }
}
