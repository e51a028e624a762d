//! Error types and context management for collage operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Failed to decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Adding a batch would push the collection past its capacity
    ///
    /// The whole batch is rejected; nothing from it is added.
    CapacityExceeded {
        /// Items already in the collection
        current: usize,
        /// Items in the rejected batch
        requested: usize,
        /// Maximum number of items the collection holds
        capacity: usize,
    },

    /// A layout was requested for zero items
    EmptyCollection,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Rasterization could not proceed
    Render {
        /// Drawing step that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// The encoder rejected the surface
    Encode {
        /// Target format name
        format: &'static str,
        /// Underlying encoder error
        source: image::ImageError,
    },

    /// The encoder finished without producing any bytes
    EmptyEncoding {
        /// Target format name
        format: &'static str,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::CapacityExceeded {
                current,
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Cannot add {requested} image(s) to a collection holding {current}: at most {capacity} images are allowed"
                )
            }
            Self::EmptyCollection => write!(f, "Cannot lay out an empty collection"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Render { operation, reason } => {
                write!(f, "Render error in {operation}: {reason}")
            }
            Self::Encode { format, source } => {
                write!(f, "Failed to encode collage as {format}: {source}")
            }
            Self::EmptyEncoding { format } => {
                write!(f, "Encoding collage as {format} produced no data")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::Encode { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

const UNKNOWN_PATH: &str = "<unknown>";

/// Attaches a file path to errors raised without one
pub trait WithPath<T> {
    /// Fill in the path of path-carrying errors that were created without it
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<CollageError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only errors still carrying the placeholder are rewritten
            if let CollageError::ImageLoad { path: slot, .. }
            | CollageError::FileSystem { path: slot, .. } = &mut error
            {
                if slot.as_os_str() == UNKNOWN_PATH {
                    *slot = path.to_path_buf();
                }
            }
            error
        })
    }
}

impl From<image::ImageError> for CollageError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from(UNKNOWN_PATH),
            source: err,
        }
    }
}

impl From<std::io::Error> for CollageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from(UNKNOWN_PATH),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a render error
pub fn render_error(operation: &'static str, reason: &impl ToString) -> CollageError {
    CollageError::Render {
        operation,
        reason: reason.to_string(),
    }
}
