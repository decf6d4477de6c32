//! The pixel buffer every editing operation consumes and produces.

use crate::EditError;

/// Number of bytes per pixel (8-bit RGBA).
pub const CHANNELS: usize = 4;

/// An 8-bit RGBA image in row-major order.
///
/// Bitmaps are immutable by convention: every transform in this crate takes
/// `&Bitmap` and returns a new one. Two bitmaps compare equal iff their
/// dimensions and every pixel byte match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Create a bitmap from raw RGBA pixel data.
    ///
    /// # Errors
    ///
    /// - `EditError::ImageTooLarge` if `width * height * 4` does not fit in `usize`
    /// - `EditError::InvalidPixelData` if `pixels.len()` is not `width * height * 4`
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, EditError> {
        let expected =
            buffer_len(width, height).ok_or(EditError::ImageTooLarge { width, height })?;
        if pixels.len() != expected {
            return Err(EditError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a bitmap filled with a single RGBA color.
    ///
    /// Allocation aborts, as with `Vec`, if the buffer does not fit in memory.
    /// Use [`Bitmap::new`] for dimensions that come from outside the crate.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        Self::from_fn(width, height, |_, _| rgba)
    }

    /// Build a bitmap by evaluating `f(x, y)` for every pixel.
    ///
    /// Allocation aborts, as with `Vec`, if the buffer does not fit in memory.
    /// Use [`Bitmap::new`] for dimensions that come from outside the crate.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(buffer_len(width, height).unwrap_or(0));
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Take ownership of an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }

    /// Convert any decoded image to RGBA8.
    pub fn from_dynamic_image(img: image::DynamicImage) -> Self {
        Self::from_rgba_image(img.into_rgba8())
    }

    /// Copy into an `image::RgbaImage` for use with the `image` crate.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the bitmap and return its pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index_of(x, y);
        let px = &self.pixels[idx..idx + CHANNELS];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Byte offset of pixel `(x, y)`. Callers guarantee the coordinates are in bounds.
    #[inline]
    pub(crate) fn index_of(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Assemble a bitmap from parts produced inside this crate, where the
    /// buffer length is already known to be right.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(Some(pixels.len()), buffer_len(width, height), "Pixel buffer size mismatch");
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// `width * height * 4`, or `None` when it overflows `usize` (easy on wasm32).
#[inline]
fn buffer_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}
