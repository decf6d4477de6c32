//! Named color filters: the catalog and the engine that applies its entries.
//!
//! # Usage
//!
//! ```ignore
//! use snapedit_core::filter::{apply_filter, lookup};
//!
//! let sepia = lookup("Sepia")?;
//! let toned = apply_filter(&photo, sepia)?;
//! ```
//!
//! The engine is a pure function of its arguments. It performs no caching:
//! calling it twice with the same bitmap and descriptor recomputes and yields
//! bit-identical output.

mod catalog;
mod kernels;

pub use catalog::{
    list_available_filters, lookup, FilterDescriptor, FilterInfo, KernelName, FILTER_IDS,
    ORIGINAL,
};

use crate::{Bitmap, EditError};

/// Apply one catalog entry to `input`, producing a new bitmap of the same size.
///
/// Parameters missing from the descriptor fall back to the catalog defaults
/// for that kernel.
///
/// # Errors
///
/// Returns `EditError::FilterApplicationFailed` when the input has zero area
/// or a parameter is not a finite number. The input is never modified.
pub fn apply_filter(input: &Bitmap, descriptor: &FilterDescriptor) -> Result<Bitmap, EditError> {
    let fail = |reason: &str| EditError::FilterApplicationFailed {
        filter: descriptor.id().to_string(),
        reason: reason.to_string(),
    };

    if input.is_empty() {
        return Err(fail("input has zero area"));
    }
    if let Some((name, _)) = descriptor.parameters().iter().find(|(_, v)| !v.is_finite()) {
        return Err(fail(&format!("parameter '{name}' is not finite")));
    }

    let param = |name: &str, default: f32| descriptor.parameter(name).unwrap_or(default);

    tracing::trace!(
        filter = descriptor.id(),
        kernel = ?descriptor.kernel(),
        width = input.width(),
        height = input.height(),
        "applying filter"
    );

    let mut pixels = input.pixels().to_vec();
    match descriptor.kernel() {
        KernelName::Identity => {}
        KernelName::Sepia => kernels::sepia(&mut pixels, param("intensity", 1.0)),
        KernelName::Monochrome => kernels::monochrome(
            &mut pixels,
            [
                param("tint_r", 0.5),
                param("tint_g", 0.5),
                param("tint_b", 0.5),
            ],
            param("intensity", 1.0),
        ),
        KernelName::Vignette => kernels::vignette(
            &mut pixels,
            input.width(),
            input.height(),
            param("intensity", 2.0),
            param("radius", 30.0),
        ),
        KernelName::Chrome => {
            kernels::chrome(&mut pixels, param("contrast", 15.0), param("saturation", 25.0))
        }
        KernelName::Noir => kernels::noir(&mut pixels, param("contrast", 35.0)),
    }

    Ok(Bitmap::from_parts(input.width(), input.height(), pixels))
}

/// Look up `id` in the catalog and apply it.
///
/// # Errors
///
/// `EditError::UnknownFilter` for an unregistered id, otherwise as
/// [`apply_filter`].
pub fn apply_filter_by_id(input: &Bitmap, id: &str) -> Result<Bitmap, EditError> {
    apply_filter(input, lookup(id)?)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn bitmap_strategy() -> impl Strategy<Value = Bitmap> {
        (1u32..=24, 1u32..=24).prop_flat_map(|(w, h)| {
            let len = (w * h * 4) as usize;
            prop::collection::vec(any::<u8>(), len..=len)
                .prop_map(move |pixels| Bitmap::new(w, h, pixels).unwrap())
        })
    }

    fn filter_id_strategy() -> impl Strategy<Value = &'static str> {
        prop::sample::select(FILTER_IDS.to_vec())
    }

    proptest! {
        /// Property: the identity filter returns a bitmap equal to its input.
        #[test]
        fn prop_identity_is_noop(img in bitmap_strategy()) {
            let out = apply_filter_by_id(&img, ORIGINAL).unwrap();
            prop_assert_eq!(out, img);
        }

        /// Property: every filter is deterministic.
        #[test]
        fn prop_filters_are_deterministic(img in bitmap_strategy(), id in filter_id_strategy()) {
            let a = apply_filter_by_id(&img, id).unwrap();
            let b = apply_filter_by_id(&img, id).unwrap();
            prop_assert_eq!(a, b);
        }

        /// Property: output dimensions always equal input dimensions.
        #[test]
        fn prop_dimensions_preserved(img in bitmap_strategy(), id in filter_id_strategy()) {
            let out = apply_filter_by_id(&img, id).unwrap();
            prop_assert_eq!(out.dimensions(), img.dimensions());
        }

        /// Property: monochrome and noir always produce R = G = B.
        #[test]
        fn prop_grayscale_filters_have_no_saturation(
            img in bitmap_strategy(),
            id in prop::sample::select(vec!["Monochrome", "Noir"]),
        ) {
            let out = apply_filter_by_id(&img, id).unwrap();
            for chunk in out.pixels().chunks_exact(4) {
                prop_assert_eq!(chunk[0], chunk[1]);
                prop_assert_eq!(chunk[1], chunk[2]);
            }
        }

        /// Property: vignette never brightens a pixel.
        #[test]
        fn prop_vignette_only_darkens(img in bitmap_strategy()) {
            let out = apply_filter_by_id(&img, "Vignette").unwrap();
            for (a, b) in img.pixels().iter().zip(out.pixels()) {
                prop_assert!(b <= a);
            }
        }
    }
}
