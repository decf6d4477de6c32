//! Spatial transforms: rectangular crop followed by a right-angle rotation.
//!
//! # Transform Order
//!
//! A [`CropSpec`] is applied in two steps:
//! 1. Extract the rectangle (source pixel coordinates)
//! 2. Rotate the extracted region by whole quarter turns
//!
//! # Coordinate System
//!
//! - Crop coordinates are in source pixels; origin is the top-left corner
//! - Rotation angles are in degrees, positive = counter-clockwise
//!
//! Both steps only move pixels around, so the result is lossless with
//! respect to pixel values.

mod crop;
mod rotation;

pub use crop::{extract_region, CropRect};
pub use rotation::{rotate_quarter_turns, QuarterTurns};

use serde::{Deserialize, Serialize};

use crate::{Bitmap, EditError};

/// What the crop tool hands back: a region plus a right-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropSpec {
    pub rect: CropRect,
    pub rotation_degrees: i32,
}

impl CropSpec {
    pub fn new(rect: CropRect, rotation_degrees: i32) -> Self {
        Self {
            rect,
            rotation_degrees,
        }
    }

    /// Keep the whole of `image`, only rotating it.
    pub fn rotate_only(image: &Bitmap, rotation_degrees: i32) -> Self {
        Self::new(CropRect::full(image), rotation_degrees)
    }

    /// Size of the bitmap this spec produces, without running it.
    ///
    /// # Errors
    ///
    /// `EditError::InvalidRotation` if the rotation is not a right angle.
    pub fn output_dimensions(&self) -> Result<(u32, u32), EditError> {
        let turns = QuarterTurns::from_degrees(self.rotation_degrees)?;
        Ok(turns.rotated_dimensions(self.rect.width, self.rect.height))
    }
}

/// Crop then rotate `image` according to `spec`.
///
/// # Errors
///
/// - `EditError::InvalidCropRegion` if the rectangle is empty or exceeds the image
/// - `EditError::InvalidRotation` if the rotation is not a multiple of 90°
///
/// Both checks run before any pixel is copied.
pub fn apply_crop(image: &Bitmap, spec: &CropSpec) -> Result<Bitmap, EditError> {
    spec.rect.validate(image)?;
    let turns = QuarterTurns::from_degrees(spec.rotation_degrees)?;

    tracing::trace!(
        rect = ?spec.rect,
        rotation = turns.degrees(),
        "applying crop"
    );

    let region = extract_region(image, spec.rect)?;
    Ok(rotate_quarter_turns(&region, turns))
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn create_test_image(width: u32, height: u32) -> Bitmap {
        Bitmap::from_fn(width, height, |x, y| {
            let v = ((y * width + x) % 256) as u8;
            [v, v.wrapping_mul(3), v.wrapping_add(17), 255]
        })
    }

    /// Image dimensions plus a rectangle guaranteed to fit inside them.
    fn image_and_rect_strategy() -> impl Strategy<Value = (u32, u32, CropRect)> {
        (1u32..=40, 1u32..=40).prop_flat_map(|(w, h)| {
            (0..w, 0..h).prop_flat_map(move |(x, y)| {
                (1..=w - x, 1..=h - y)
                    .prop_map(move |(cw, ch)| (w, h, CropRect::new(x, y, cw, ch)))
            })
        })
    }

    fn right_angle_strategy() -> impl Strategy<Value = i32> {
        prop::sample::select(vec![0, 90, 180, 270])
    }

    proptest! {
        /// Property: output is (w, h) for 0°/180° and (h, w) for 90°/270°.
        #[test]
        fn prop_output_dimension_law(
            (w, h, rect) in image_and_rect_strategy(),
            rotation in right_angle_strategy(),
        ) {
            let img = create_test_image(w, h);
            let out = apply_crop(&img, &CropSpec::new(rect, rotation)).unwrap();

            let expected = if rotation % 180 == 0 {
                (rect.width, rect.height)
            } else {
                (rect.height, rect.width)
            };
            prop_assert_eq!(out.dimensions(), expected);
        }

        /// Property: crop/rotate only rearranges pixels, it never invents values.
        #[test]
        fn prop_pixels_are_rearranged_not_changed(
            (w, h, rect) in image_and_rect_strategy(),
            rotation in right_angle_strategy(),
        ) {
            let img = create_test_image(w, h);
            let region = extract_region(&img, rect).unwrap();
            let out = apply_crop(&img, &CropSpec::new(rect, rotation)).unwrap();

            let mut before: Vec<&[u8]> = region.pixels().chunks_exact(4).collect();
            let mut after: Vec<&[u8]> = out.pixels().chunks_exact(4).collect();
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        /// Property: a rectangle extending past the right edge is always rejected.
        #[test]
        fn prop_oversized_width_rejected(
            (w, h) in (1u32..=40, 1u32..=40),
            extra in 1u32..=20,
        ) {
            let img = create_test_image(w, h);
            let spec = CropSpec::new(CropRect::new(0, 0, w + extra, h), 0);
            let is_region_error = matches!(
                apply_crop(&img, &spec),
                Err(EditError::InvalidCropRegion { .. })
            );
            prop_assert!(is_region_error);
        }

        /// Property: non-right-angle rotations are always rejected.
        #[test]
        fn prop_non_right_angle_rejected(degrees in -1000i32..=1000) {
            prop_assume!(degrees % 90 != 0);
            let img = create_test_image(4, 4);
            let spec = CropSpec::rotate_only(&img, degrees);
            prop_assert_eq!(apply_crop(&img, &spec), Err(EditError::InvalidRotation(degrees)));
        }
    }
}
