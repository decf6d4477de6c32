//! PNG encoding for lossless export targets.

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use crate::{Bitmap, EditError};

/// PNG file signature.
pub(crate) const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Encode `bitmap` as an RGBA8 PNG. Alpha is preserved.
///
/// # Errors
///
/// Returns `EditError::EncodingFailed` if the encoder rejects the image.
pub(crate) fn encode_png(bitmap: &Bitmap) -> Result<Vec<u8>, EditError> {
    let mut buffer = Cursor::new(Vec::new());
    let encoder =
        PngEncoder::new_with_quality(&mut buffer, CompressionType::Default, FilterType::Adaptive);
    encoder
        .write_image(
            bitmap.pixels(),
            bitmap.width(),
            bitmap.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EditError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
