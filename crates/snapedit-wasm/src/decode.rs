//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@snapedit/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const bitmap = decode_image(bytes);
//! console.log(`Decoded ${bitmap.width}x${bitmap.height}`);
//! ```

use snapedit_core::decode;
use wasm_bindgen::prelude::*;

use crate::error::decode_error;
use crate::types::JsBitmap;

/// Decode a JPEG or PNG file into an upright RGBA bitmap.
///
/// EXIF orientation is applied, so portrait photos arrive portrait.
/// Throws `InvalidFormat`, `CorruptedFile` or `EmptyImage`.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsBitmap, JsValue> {
    decode::decode_image(bytes)
        .map(JsBitmap::from_bitmap)
        .map_err(decode_error)
}

/// EXIF orientation tag (1-8) of an image file; 1 when absent.
#[wasm_bindgen]
pub fn get_orientation(bytes: &[u8]) -> u8 {
    decode::read_orientation(bytes) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapedit_core::{encode, Bitmap, ExportTarget};

    #[test]
    fn test_decode_image_from_png() {
        let img = Bitmap::solid(3, 2, [10, 20, 30, 255]);
        let png = encode(&img, ExportTarget::Lossless).unwrap().bytes;

        let decoded = decode_image(&png).unwrap();
        assert_eq!(decoded.width(), 3);
        assert_eq!(decoded.height(), 2);
        assert_eq!(decoded.as_bitmap(), &img);
    }

    #[test]
    fn test_get_orientation_without_exif() {
        assert_eq!(get_orientation(&[0, 1, 2]), 1);
    }
}
