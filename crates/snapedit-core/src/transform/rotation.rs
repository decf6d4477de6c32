//! Lossless right-angle rotation.
//!
//! Rotations are restricted to quarter turns, so every output pixel is an
//! exact copy of one input pixel and no interpolation is needed.
//!
//! # Algorithm
//!
//! Inverse mapping: for each destination pixel we compute the source pixel
//! it comes from. With source size `w x h`, counter-clockwise turns map as:
//!
//! ```text
//!  90°: src = (w - 1 - dst_y, dst_x)
//! 180°: src = (w - 1 - dst_x, h - 1 - dst_y)
//! 270°: src = (dst_y, h - 1 - dst_x)
//! ```

use serde::{Deserialize, Serialize};

use crate::bitmap::CHANNELS;
use crate::{Bitmap, EditError};

/// A rotation by a whole number of counter-clockwise quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuarterTurns {
    #[default]
    None,
    /// 90° counter-clockwise.
    Ccw90,
    Half,
    /// 270° counter-clockwise (90° clockwise).
    Ccw270,
}

impl QuarterTurns {
    /// Convert degrees (positive = counter-clockwise) to quarter turns.
    ///
    /// Any multiple of 90 is accepted, including negative values and values
    /// beyond a full turn.
    ///
    /// # Errors
    ///
    /// Returns `EditError::InvalidRotation` if `degrees` is not a multiple of 90.
    pub fn from_degrees(degrees: i32) -> Result<Self, EditError> {
        if degrees % 90 != 0 {
            return Err(EditError::InvalidRotation(degrees));
        }
        Ok(match degrees.rem_euclid(360) {
            0 => QuarterTurns::None,
            90 => QuarterTurns::Ccw90,
            180 => QuarterTurns::Half,
            _ => QuarterTurns::Ccw270,
        })
    }

    /// Normalized angle in 0..360.
    pub fn degrees(self) -> i32 {
        match self {
            QuarterTurns::None => 0,
            QuarterTurns::Ccw90 => 90,
            QuarterTurns::Half => 180,
            QuarterTurns::Ccw270 => 270,
        }
    }

    /// True for odd multiples of 90°, which swap width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, QuarterTurns::Ccw90 | QuarterTurns::Ccw270)
    }

    /// Output size for a `width x height` input.
    pub fn rotated_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }
}

/// Rotate `image` by `turns`, returning a new bitmap.
pub fn rotate_quarter_turns(image: &Bitmap, turns: QuarterTurns) -> Bitmap {
    if turns == QuarterTurns::None {
        return image.clone();
    }

    let (w, h) = image.dimensions();
    let (dst_w, dst_h) = turns.rotated_dimensions(w, h);
    let src = image.pixels();
    let mut output = Vec::with_capacity(image.pixels().len());

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (src_x, src_y) = match turns {
                QuarterTurns::Ccw90 => (w - 1 - dst_y, dst_x),
                QuarterTurns::Half => (w - 1 - dst_x, h - 1 - dst_y),
                QuarterTurns::Ccw270 => (dst_y, h - 1 - dst_x),
                QuarterTurns::None => (dst_x, dst_y),
            };
            let idx = image.index_of(src_x, src_y);
            output.extend_from_slice(&src[idx..idx + CHANNELS]);
        }
    }

    Bitmap::from_parts(dst_w, dst_h, output)
}
