//! JPEG encoding for compressed export targets.
//!
//! JPEG carries no alpha channel, so translucent pixels are composited onto
//! white before encoding.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use crate::bitmap::CHANNELS;
use crate::{Bitmap, EditError};

/// Map a quality factor in `(0, 1]` to the encoder's `1..=100` scale.
pub(crate) fn quality_percent(quality: f32) -> u8 {
    (quality * 100.0).round().clamp(1.0, 100.0) as u8
}

/// Encode `bitmap` as a baseline JPEG.
///
/// `quality` must already be validated to lie in `(0, 1]`.
///
/// # Errors
///
/// Returns `EditError::EncodingFailed` if the encoder rejects the image.
pub(crate) fn encode_jpeg(bitmap: &Bitmap, quality: f32) -> Result<Vec<u8>, EditError> {
    let rgb = flatten_onto_white(bitmap.pixels());

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality_percent(quality));
    encoder
        .write_image(&rgb, bitmap.width(), bitmap.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EditError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Drop alpha by compositing RGBA over an opaque white background.
fn flatten_onto_white(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / CHANNELS * 3);
    for px in rgba.chunks_exact(CHANNELS) {
        let alpha = px[3] as u32;
        for &c in &px[..3] {
            // c * a + 255 * (255 - a), divided by 255 with rounding
            let v = (c as u32 * alpha + 255 * (255 - alpha) + 127) / 255;
            rgb.push(v as u8);
        }
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_percent() {
        assert_eq!(quality_percent(0.8), 80);
        assert_eq!(quality_percent(1.0), 100);
        assert_eq!(quality_percent(0.001), 1);
        assert_eq!(quality_percent(0.42), 42);
    }

    #[test]
    fn test_encode_jpeg_markers() {
        let img = Bitmap::solid(100, 100, [128, 128, 128, 255]);
        let jpeg = encode_jpeg(&img, 0.9).unwrap();

        // SOI marker
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        // EOI marker
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_small_image() {
        let img = Bitmap::solid(1, 1, [255, 0, 0, 255]);
        let jpeg = encode_jpeg(&img, 0.9).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        let img = Bitmap::from_fn(64, 64, |x, y| {
            [(x * 4) as u8, (y * 4) as u8, ((x * y) % 256) as u8, 255]
        });
        let low = encode_jpeg(&img, 0.1).unwrap();
        let high = encode_jpeg(&img, 1.0).unwrap();
        assert!(high.len() > low.len());
    }

    #[test]
    fn test_flatten_opaque_keeps_color() {
        assert_eq!(flatten_onto_white(&[10, 20, 30, 255]), vec![10, 20, 30]);
    }

    #[test]
    fn test_flatten_transparent_becomes_white() {
        assert_eq!(flatten_onto_white(&[10, 20, 30, 0]), vec![255, 255, 255]);
    }

    #[test]
    fn test_flatten_half_alpha_blends() {
        let rgb = flatten_onto_white(&[0, 0, 0, 128]);
        // 255 * 127 / 255 = 127
        assert_eq!(rgb, vec![127, 127, 127]);
    }
}
