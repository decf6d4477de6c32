//! Rectangular sub-selection in source pixel coordinates.
//!
//! # Coordinate System
//!
//! - (0, 0) = top-left pixel
//! - `x`/`width` run right, `y`/`height` run down
//! - The rectangle must lie fully inside the image; nothing is clamped

use serde::{Deserialize, Serialize};

use crate::bitmap::CHANNELS;
use crate::{Bitmap, EditError};

/// A crop rectangle in source pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The rectangle covering all of `image`.
    pub fn full(image: &Bitmap) -> Self {
        Self::new(0, 0, image.width(), image.height())
    }

    /// Check that the rectangle is non-empty and lies inside `image`.
    ///
    /// # Errors
    ///
    /// Returns `EditError::InvalidCropRegion` otherwise.
    pub fn validate(&self, image: &Bitmap) -> Result<(), EditError> {
        let fits = |start: u32, len: u32, limit: u32| {
            len > 0 && start.checked_add(len).is_some_and(|end| end <= limit)
        };

        if fits(self.x, self.width, image.width()) && fits(self.y, self.height, image.height()) {
            Ok(())
        } else {
            Err(EditError::InvalidCropRegion {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width: image.width(),
                image_height: image.height(),
            })
        }
    }
}

/// Copy the pixels inside `rect` into a new bitmap.
///
/// # Errors
///
/// Returns `EditError::InvalidCropRegion` if the rectangle is empty or not
/// fully inside `image`.
pub fn extract_region(image: &Bitmap, rect: CropRect) -> Result<Bitmap, EditError> {
    rect.validate(image)?;

    // Fast path: full-frame crop is a copy
    if rect == CropRect::full(image) {
        return Ok(image.clone());
    }

    let row_bytes = rect.width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * rect.height as usize);

    // Rows are contiguous in both buffers, so copy a whole row at a time
    for y in rect.y..rect.y + rect.height {
        let start = image.index_of(rect.x, y);
        output.extend_from_slice(&image.pixels()[start..start + row_bytes]);
    }

    Ok(Bitmap::from_parts(rect.width, rect.height, output))
}
