//! WASM-compatible wrapper types for image data.

use snapedit_core::Bitmap;
use wasm_bindgen::prelude::*;

use crate::error::edit_error;

/// An RGBA image owned by WASM memory.
///
/// # Memory Management
///
/// `pixels()` copies the buffer into a JavaScript `Uint8Array`. Keep images
/// in WASM memory between operations and only extract pixels to draw them.
#[wasm_bindgen]
pub struct JsBitmap {
    inner: Bitmap,
}

#[wasm_bindgen]
impl JsBitmap {
    /// Wrap RGBA pixel data (4 bytes per pixel, row-major order).
    ///
    /// Throws `InvalidPixelData` if the buffer length is not `width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsBitmap, JsValue> {
        Bitmap::new(width, height, pixels)
            .map(JsBitmap::from_bitmap)
            .map_err(edit_error)
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Number of bytes in the pixel buffer (width * height * 4).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGBA pixel data as a `Uint8Array` (a copy).
    ///
    /// The layout matches `ImageData`, so the result can be drawn directly:
    /// `new ImageData(new Uint8ClampedArray(bmp.pixels()), bmp.width)`.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional: wasm-bindgen's finalizer releases it otherwise.
    pub fn free(self) {}
}

impl JsBitmap {
    pub(crate) fn from_bitmap(inner: Bitmap) -> Self {
        Self { inner }
    }

    pub(crate) fn as_bitmap(&self) -> &Bitmap {
        &self.inner
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_js_bitmap_rejects_short_buffer() {
        assert!(JsBitmap::new(10, 10, vec![0; 12]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_js_bitmap_rejects_unaddressable_size() {
        let err: js_sys::Error = JsBitmap::new(65536, 16384, vec![])
            .err()
            .unwrap()
            .dyn_into()
            .unwrap();
        assert_eq!(String::from(err.name()), "ImageTooLarge");
    }
}
