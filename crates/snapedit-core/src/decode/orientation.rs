//! EXIF orientation: read the tag, then turn the image upright.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;

use super::Orientation;

/// Read the EXIF orientation tag from an image container.
///
/// Files without EXIF data, or with an unreadable tag, are `Normal`.
pub fn read_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    let Ok(exif) = Reader::new().read_from_container(&mut cursor) else {
        return Orientation::Normal;
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
        .map(Orientation::from)
        .unwrap_or_default()
}

/// Apply `orientation` so the image displays upright.
pub(crate) fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2x1 image: red on the left, green on the right.
    fn red_green() -> DynamicImage {
        let pixels = vec![255, 0, 0, 255, 0, 255, 0, 255];
        DynamicImage::ImageRgba8(image::RgbaImage::from_raw(2, 1, pixels).unwrap())
    }

    #[test]
    fn test_normal_is_untouched() {
        let out = apply_orientation(red_green(), Orientation::Normal).into_rgba8();
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_rotate90_cw_puts_left_edge_on_top() {
        let out = apply_orientation(red_green(), Orientation::Rotate90CW).into_rgba8();
        assert_eq!(out.dimensions(), (1, 2));
        assert_eq!(out.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(out.get_pixel(0, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_rotate270_cw_puts_right_edge_on_top() {
        let out = apply_orientation(red_green(), Orientation::Rotate270CW).into_rgba8();
        assert_eq!(out.dimensions(), (1, 2));
        assert_eq!(out.get_pixel(0, 0).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_flip_horizontal_and_rotate180_swap_pixels() {
        for orientation in [Orientation::FlipHorizontal, Orientation::Rotate180] {
            let out = apply_orientation(red_green(), orientation).into_rgba8();
            assert_eq!(out.get_pixel(0, 0).0, [0, 255, 0, 255]);
            assert_eq!(out.get_pixel(1, 0).0, [255, 0, 0, 255]);
        }
    }

    #[test]
    fn test_dimensions_follow_swap_rule() {
        for value in 1..=8 {
            let orientation = Orientation::from(value);
            let out = apply_orientation(red_green(), orientation);
            let expected = if orientation.swaps_dimensions() { (1, 2) } else { (2, 1) };
            assert_eq!((out.width(), out.height()), expected, "orientation {value}");
        }
    }

    #[test]
    fn test_read_orientation_without_exif() {
        assert_eq!(read_orientation(&[0x00, 0x01, 0x02]), Orientation::Normal);
        assert_eq!(read_orientation(&[]), Orientation::Normal);
    }
}
