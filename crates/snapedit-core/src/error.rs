//! Error type shared by every editing operation.

use thiserror::Error;

/// Errors returned by the filter engine, crop adapter, edit session and export encoder.
///
/// Every variant is recoverable. An operation that returns one of these
/// leaves the session exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    /// An operation that needs an image was called before `load`.
    #[error("No image loaded")]
    NoImageLoaded,

    /// The filter id is not in the catalog.
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// The kernel could not produce output (e.g. zero-area input).
    #[error("Filter '{filter}' could not be applied: {reason}")]
    FilterApplicationFailed { filter: String, reason: String },

    /// The crop rectangle is empty or extends past the image.
    #[error(
        "Invalid crop region {x},{y} {width}x{height} for a {image_width}x{image_height} image"
    )]
    InvalidCropRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    /// Rotation is not a multiple of 90 degrees.
    #[error("Invalid rotation: {0} degrees is not a multiple of 90")]
    InvalidRotation(i32),

    /// Lossy quality outside (0, 1].
    #[error("Invalid quality: {0} (must be in (0, 1])")]
    InvalidQuality(f32),

    /// The encoder rejected the bitmap.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    /// Pixel buffer length does not match the declared dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// The pixel buffer for these dimensions would not fit in memory.
    #[error("Image of {width}x{height} pixels is too large")]
    ImageTooLarge { width: u32, height: u32 },

    /// `load` was given a bitmap with a zero dimension.
    #[error("Cannot load an image with zero width or height")]
    EmptyImage,

    /// A background edit finished after the session moved on.
    #[error("Edit was prepared against a session state that no longer exists")]
    StaleEdit,
}

impl EditError {
    /// Stable name of the error kind, for hosts that branch on it.
    pub fn kind(&self) -> &'static str {
        match self {
            EditError::NoImageLoaded => "NoImageLoaded",
            EditError::UnknownFilter(_) => "UnknownFilter",
            EditError::FilterApplicationFailed { .. } => "FilterApplicationFailed",
            EditError::InvalidCropRegion { .. } => "InvalidCropRegion",
            EditError::InvalidRotation(_) => "InvalidRotation",
            EditError::InvalidQuality(_) => "InvalidQuality",
            EditError::EncodingFailed(_) => "EncodingFailed",
            EditError::InvalidPixelData { .. } => "InvalidPixelData",
            EditError::ImageTooLarge { .. } => "ImageTooLarge",
            EditError::EmptyImage => "EmptyImage",
            EditError::StaleEdit => "StaleEdit",
        }
    }
}
