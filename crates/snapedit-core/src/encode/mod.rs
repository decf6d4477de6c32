//! Export encoding: turn the current bitmap into bytes for a share destination.
//!
//! This module provides:
//! - [`ExportTarget`]: lossy (JPEG, with a quality factor) or lossless (PNG)
//! - [`encode`]: the encoder entry point
//! - [`ExportPayload`]: encoded bytes plus the labels a destination needs
//!
//! Encoding is pure and deterministic for a given bitmap and target.
//!
//! # Examples
//!
//! ```ignore
//! use snapedit_core::encode::{encode, ExportTarget};
//!
//! let payload = encode(&bitmap, ExportTarget::Lossy { quality: 0.8 })?;
//! println!("{} bytes of {}", payload.bytes.len(), payload.format.mime_type());
//! ```

mod jpeg;
mod png;

use serde::{Deserialize, Serialize};

use crate::{Bitmap, EditError};

/// How the exported image should be encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ExportTarget {
    /// Compressed output. `quality` must lie in `(0, 1]`.
    Lossy { quality: f32 },
    /// Uncompressed/lossless output. The safe default.
    #[default]
    Lossless,
}

impl ExportTarget {
    /// The format this target encodes to.
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportTarget::Lossy { .. } => ExportFormat::Jpeg,
            ExportTarget::Lossless => ExportFormat::Png,
        }
    }

    /// Check the quality factor of a lossy target.
    ///
    /// # Errors
    ///
    /// Returns `EditError::InvalidQuality` for NaN or values outside `(0, 1]`.
    pub fn validate(&self) -> Result<(), EditError> {
        match *self {
            ExportTarget::Lossy { quality } if !(quality > 0.0 && quality <= 1.0) => {
                Err(EditError::InvalidQuality(quality))
            }
            _ => Ok(()),
        }
    }
}

/// Concrete file format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Jpeg,
    Png,
}

impl ExportFormat {
    /// MIME type, e.g. for an HTTP upload or a `Blob`.
    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Png => "image/png",
        }
    }

    /// Uniform type identifier used by platform share sheets.
    pub fn type_identifier(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "public.jpeg",
            ExportFormat::Png => "public.png",
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Jpeg => "jpg",
            ExportFormat::Png => "png",
        }
    }

    /// Whether the format discards information.
    pub fn is_lossy(self) -> bool {
        matches!(self, ExportFormat::Jpeg)
    }
}

/// Encoded image ready to hand to a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
}

/// Encode `bitmap` for `target`.
///
/// # Errors
///
/// - `EditError::InvalidQuality` if a lossy quality is outside `(0, 1]`
/// - `EditError::EncodingFailed` if the bitmap has a zero dimension or the
///   underlying encoder fails
pub fn encode(bitmap: &Bitmap, target: ExportTarget) -> Result<ExportPayload, EditError> {
    target.validate()?;

    if bitmap.is_empty() {
        return Err(EditError::EncodingFailed(format!(
            "bitmap has zero dimensions ({}x{})",
            bitmap.width(),
            bitmap.height()
        )));
    }

    let bytes = match target {
        ExportTarget::Lossy { quality } => jpeg::encode_jpeg(bitmap, quality)?,
        ExportTarget::Lossless => png::encode_png(bitmap)?,
    };

    tracing::debug!(
        format = target.format().extension(),
        width = bitmap.width(),
        height = bitmap.height(),
        bytes = bytes.len(),
        "encoded export"
    );

    Ok(ExportPayload {
        bytes,
        format: target.format(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Bitmap {
        Bitmap::from_fn(width, height, |x, y| {
            [
                (x * 255 / width) as u8,
                (y * 255 / height) as u8,
                128,
                255,
            ]
        })
    }

    #[test]
    fn test_zero_quality_is_rejected() {
        let img = gradient(10, 10);
        assert_eq!(
            encode(&img, ExportTarget::Lossy { quality: 0.0 }),
            Err(EditError::InvalidQuality(0.0))
        );
    }

    #[test]
    fn test_out_of_range_quality_is_rejected() {
        let img = gradient(10, 10);
        for quality in [-0.5, 1.01, 80.0] {
            assert!(matches!(
                encode(&img, ExportTarget::Lossy { quality }),
                Err(EditError::InvalidQuality(_))
            ));
        }
    }

    #[test]
    fn test_nan_quality_is_rejected() {
        let img = gradient(10, 10);
        assert!(matches!(
            encode(&img, ExportTarget::Lossy { quality: f32::NAN }),
            Err(EditError::InvalidQuality(_))
        ));
    }

    #[test]
    fn test_lossy_export_succeeds() {
        let img = gradient(32, 32);
        let payload = encode(&img, ExportTarget::Lossy { quality: 0.8 }).unwrap();
        assert!(!payload.bytes.is_empty());
        assert_eq!(payload.format, ExportFormat::Jpeg);
        assert_eq!(&payload.bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_quality_one_is_allowed() {
        let img = gradient(8, 8);
        assert!(encode(&img, ExportTarget::Lossy { quality: 1.0 }).is_ok());
    }

    #[test]
    fn test_lossless_export_is_png() {
        let img = gradient(32, 32);
        let payload = encode(&img, ExportTarget::Lossless).unwrap();
        assert_eq!(payload.format, ExportFormat::Png);
        assert_eq!(&payload.bytes[0..8], &png::PNG_SIGNATURE);
    }

    #[test]
    fn test_zero_dimensions_fail() {
        let empty = Bitmap::new(0, 16, vec![]).unwrap();
        assert!(matches!(
            encode(&empty, ExportTarget::Lossless),
            Err(EditError::EncodingFailed(_))
        ));
        assert!(matches!(
            encode(&empty, ExportTarget::Lossy { quality: 0.5 }),
            Err(EditError::EncodingFailed(_))
        ));
    }

    #[test]
    fn test_quality_checked_before_dimensions() {
        let empty = Bitmap::new(0, 0, vec![]).unwrap();
        assert!(matches!(
            encode(&empty, ExportTarget::Lossy { quality: 2.0 }),
            Err(EditError::InvalidQuality(_))
        ));
    }

    #[test]
    fn test_format_labels() {
        assert_eq!(ExportFormat::Jpeg.mime_type(), "image/jpeg");
        assert_eq!(ExportFormat::Png.mime_type(), "image/png");
        assert_eq!(ExportFormat::Jpeg.type_identifier(), "public.jpeg");
        assert_eq!(ExportFormat::Png.type_identifier(), "public.png");
        assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
        assert!(ExportFormat::Jpeg.is_lossy());
        assert!(!ExportFormat::Png.is_lossy());
    }

    #[test]
    fn test_default_target_is_lossless() {
        assert_eq!(ExportTarget::default(), ExportTarget::Lossless);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
