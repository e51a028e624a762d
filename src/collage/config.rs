//! Render configuration values: background color, export format and quality

use crate::collage::canvas::AspectRatio;
use crate::io::configuration::DEFAULT_QUALITY;
use crate::io::error::{CollageError, Result, invalid_parameter};
use crate::layout::placement::LayoutStrategy;
use std::fmt;
use std::str::FromStr;

/// Straight (non-premultiplied) RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel, 255 is opaque
    pub a: u8,
}

impl Color {
    /// Opaque white
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from RGB channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from RGBA channels
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels in RGBA order
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

impl FromStr for Color {
    type Err = CollageError;

    /// Accepts `#rgb`, `#rrggbb`, `#rrggbbaa` (leading `#` optional) and the
    /// names `white` and `black`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "white" => return Ok(Self::WHITE),
            "black" => return Ok(Self::BLACK),
            _ => {}
        }

        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || invalid_parameter("background", &s, &"expected #rgb, #rrggbb or #rrggbbaa");

        if !hex.is_ascii() || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(invalid)
        };

        match hex.len() {
            3 => {
                // Each short digit expands to a repeated pair (f -> ff)
                let short = |i: usize| channel(i..i + 1).map(|v| v * 17);
                Ok(Self::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(invalid()),
        }
    }
}

/// Encoded image format used for preview and export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportFormat {
    /// Lossless PNG
    #[default]
    Png,
    /// Lossy JPEG, honours the quality factor
    Jpeg,
    /// Lossless WebP
    WebP,
}

impl ExportFormat {
    /// MIME type of the encoded data
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// File extension written on export
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::WebP => "webp",
        }
    }

    /// Whether the quality factor changes the output
    pub const fn is_lossy(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::WebP => "webp",
        };
        f.write_str(name)
    }
}

impl FromStr for ExportFormat {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" | "image/png" => Ok(Self::Png),
            "jpeg" | "jpg" | "image/jpeg" => Ok(Self::Jpeg),
            "webp" | "image/webp" => Ok(Self::WebP),
            _ => Err(invalid_parameter(
                "format",
                &s,
                &"supported formats are png, jpeg and webp",
            )),
        }
    }
}

/// Encoder quality factor in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality(f32);

impl Quality {
    /// Validate a quality factor
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a finite number in `0.0..=1.0`
    pub fn new(value: f32) -> Result<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(invalid_parameter(
                "quality",
                &value,
                &"quality must be between 0.0 and 1.0",
            ));
        }
        Ok(Self(value))
    }

    /// Raw factor
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Quality on the 1..=100 scale JPEG encoders expect
    pub fn percent(self) -> u8 {
        (self.0 * 100.0).round().clamp(1.0, 100.0) as u8
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(DEFAULT_QUALITY)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quality {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<f32>()
            .map_err(|e| invalid_parameter("quality", &s, &e))?;
        Self::new(value)
    }
}

/// Everything a render needs besides the images themselves
///
/// A plain value rebuilt from user choices before every render.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderConfig {
    /// Placement algorithm
    pub strategy: LayoutStrategy,
    /// Canvas aspect ratio
    pub aspect: AspectRatio,
    /// Flat background fill
    pub background: Color,
    /// Preview and export encoding
    pub format: ExportFormat,
    /// Encoder quality
    pub quality: Quality,
}
