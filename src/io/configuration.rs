//! Layout constants and runtime configuration defaults

// Maximum number of photos a collection accepts
/// Capacity of a collage collection
pub const MAX_IMAGES: usize = 20;

/// Canvas width every fixed pixel constant below is expressed against
pub const BASE_WIDTH: u32 = 1200;

// Grid layout
/// Inset applied to each side of a grid cell (pixels at base width)
pub const GRID_PADDING: f64 = 10.0;

// Circle layout
/// Ring radius as a fraction of the shorter canvas side
pub const CIRCLE_RADIUS_FACTOR: f64 = 0.35;
/// Side of each circular item as a fraction of the shorter canvas side
pub const CIRCLE_ITEM_FACTOR: f64 = 0.25;

// Masonry layout
/// Full span of the random center offset as a fraction of the cell size
pub const MASONRY_JITTER_SPAN: f64 = 0.2;
/// Largest absolute rotation applied to a masonry item (radians)
pub const MASONRY_MAX_ROTATION: f64 = 0.075;
/// Item size as a fraction of the cell size
pub const MASONRY_ITEM_FACTOR: f64 = 0.95;

// Masonry effects, pixels at base width
/// Shadow offset along both axes
pub const SHADOW_OFFSET: f64 = 5.0;
/// Shadow blur extent, twice the gaussian standard deviation
pub const SHADOW_BLUR: f64 = 20.0;
/// Shadow opacity (half transparent black)
pub const SHADOW_ALPHA: u8 = 128;
/// Width of the white frame drawn around masonry items
pub const BORDER_WIDTH: f64 = 10.0;

// Export defaults
/// Quality factor handed to lossy encoders
pub const DEFAULT_QUALITY: f32 = 0.9;
/// Aspect ratio used when none is given
pub const DEFAULT_ASPECT: &str = "1:1";
/// Background fill used when none is given
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
/// Prefix of generated export file names
pub const OUTPUT_PREFIX: &str = "kora-ju-collage";

/// File extensions accepted as collage inputs (lowercase)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

// Progress display settings
/// Tick interval of the composing spinner
pub const SPINNER_TICK_MS: u64 = 80;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
