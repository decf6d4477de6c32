//! Image source decoding.
//!
//! Turns the bytes of a picked photo (JPEG or PNG) into an upright RGBA
//! [`Bitmap`] ready for [`EditSession::load`](crate::EditSession::load).
//! EXIF orientation is read with `kamadak-exif` and applied before the
//! bitmap is returned.
//!
//! # Examples
//!
//! ```ignore
//! use snapedit_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg")?;
//! let bitmap = decode_image(&bytes)?;
//! session.load(bitmap)?;
//! ```

mod orientation;
mod types;

pub use orientation::read_orientation;
pub use types::{DecodeError, Orientation};

use std::io::Cursor;

use image::ImageReader;

use crate::Bitmap;

/// Decode an image file and apply its EXIF orientation.
///
/// # Errors
///
/// - `DecodeError::InvalidFormat` if the bytes match no enabled format
/// - `DecodeError::CorruptedFile` if the format is known but decoding fails
/// - `DecodeError::EmptyImage` if the decoded image has a zero dimension
pub fn decode_image(bytes: &[u8]) -> Result<Bitmap, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let Some(format) = reader.format() else {
        tracing::debug!(len = bytes.len(), "unrecognized image format");
        return Err(DecodeError::InvalidFormat);
    };

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let orientation = read_orientation(bytes);
    let img = orientation::apply_orientation(img, orientation);

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::EmptyImage);
    }

    tracing::debug!(
        ?format,
        ?orientation,
        width = img.width(),
        height = img.height(),
        "decoded image"
    );

    Ok(Bitmap::from_dynamic_image(img))
}
