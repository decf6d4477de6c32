//! Types shared by the image-source decoder.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while turning file bytes into a [`Bitmap`](crate::Bitmap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The bytes are not in any enabled image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The format was recognized but the data could not be decoded.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The file decoded to an image with a zero dimension.
    #[error("Image has zero width or height")]
    EmptyImage,
}

impl DecodeError {
    /// Stable name of the error kind, for hosts that branch on it.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::InvalidFormat => "InvalidFormat",
            DecodeError::CorruptedFile(_) => "CorruptedFile",
            DecodeError::EmptyImage => "EmptyImage",
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal, then rotate 270° clockwise.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal, then rotate 90° clockwise.
    Transverse = 7,
    Rotate270CW = 8,
}

impl Orientation {
    /// 90° and 270° orientations (and their mirrored forms) swap width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(
            self,
            Orientation::Transpose
                | Orientation::Rotate90CW
                | Orientation::Transverse
                | Orientation::Rotate270CW
        )
    }
}

impl From<u32> for Orientation {
    /// Out-of-range tag values are treated as `Normal`.
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}
