//! Pixel kernels behind the catalog entries.
//!
//! All kernels work in place on an RGBA8 buffer that the engine has already
//! copied from the input. Channel math happens in normalized `f32` and is
//! rounded back to `u8` once per channel. Alpha is never touched.
//!
//! ## Percentage scales
//! `contrast` and `saturation` are on a -100..100 scale: 0 leaves the pixel
//! unchanged, 100 doubles the spread around the midpoint (or the gray value).

use crate::bitmap::CHANNELS;

/// ITU-R BT.709 luma coefficients.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Classic sepia tone matrix (rows produce R, G, B).
const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

#[inline]
fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

#[inline]
fn to_unit(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Linear blend. Written so that `t == 1.0` yields exactly `b`.
#[inline]
fn mix(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// `6t^5 - 15t^4 + 10t^3`, clamped to 0..1.
#[inline]
fn smootherstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn contrast(v: f32, amount: f32) -> f32 {
    (v - 0.5) * (1.0 + amount / 100.0) + 0.5
}

/// Run `f` over every pixel's RGB, leaving alpha alone.
#[inline]
fn map_rgb(pixels: &mut [u8], mut f: impl FnMut(f32, f32, f32) -> (f32, f32, f32)) {
    for chunk in pixels.chunks_exact_mut(CHANNELS) {
        let (r, g, b) = f(to_unit(chunk[0]), to_unit(chunk[1]), to_unit(chunk[2]));
        chunk[0] = to_byte(r);
        chunk[1] = to_byte(g);
        chunk[2] = to_byte(b);
    }
}

/// Sepia tone blended with the input by `intensity` (0..1).
pub(crate) fn sepia(pixels: &mut [u8], intensity: f32) {
    let t = intensity.clamp(0.0, 1.0);
    map_rgb(pixels, |r, g, b| {
        let [mr, mg, mb] = SEPIA_MATRIX;
        let sr = mr[0] * r + mr[1] * g + mr[2] * b;
        let sg = mg[0] * r + mg[1] * g + mg[2] * b;
        let sb = mb[0] * r + mb[1] * g + mb[2] * b;
        (mix(r, sr, t), mix(g, sg, t), mix(b, sb, t))
    });
}

/// Map luminance onto `tint`, blended with the input by `intensity` (0..1).
///
/// The tint is scaled to unit luminance first, so a neutral tint of any
/// brightness produces a plain grayscale image with R = G = B.
pub(crate) fn monochrome(pixels: &mut [u8], tint: [f32; 3], intensity: f32) {
    let t = intensity.clamp(0.0, 1.0);
    let tint_luma = luminance(tint[0], tint[1], tint[2]);
    let scale = if tint_luma > f32::EPSILON {
        [tint[0] / tint_luma, tint[1] / tint_luma, tint[2] / tint_luma]
    } else {
        [0.0; 3]
    };
    map_rgb(pixels, |r, g, b| {
        let y = luminance(r, g, b);
        (
            mix(r, y * scale[0], t),
            mix(g, y * scale[1], t),
            mix(b, y * scale[2], t),
        )
    });
}

/// Darken toward the corners.
///
/// `radius` is the size of the untouched central disc as a percentage of the
/// half-diagonal. Beyond it the brightness factor falls off as
/// `1 - intensity * smootherstep(t)`, where `t` goes from 0 at the disc edge
/// to 1 at the corners.
pub(crate) fn vignette(pixels: &mut [u8], width: u32, height: u32, intensity: f32, radius: f32) {
    let half_w = width as f32 / 2.0;
    let half_h = height as f32 / 2.0;
    let half_diagonal = (half_w * half_w + half_h * half_h).sqrt().max(f32::EPSILON);
    let inner = (radius / 100.0).clamp(0.0, 1.0);
    let falloff = (1.0 - inner).max(0.001);
    let strength = intensity.max(0.0);

    for (i, chunk) in pixels.chunks_exact_mut(CHANNELS).enumerate() {
        let x = (i % width as usize) as f32 + 0.5;
        let y = (i / width as usize) as f32 + 0.5;
        let dx = x - half_w;
        let dy = y - half_h;
        let dist = (dx * dx + dy * dy).sqrt() / half_diagonal;

        if dist <= inner {
            continue;
        }
        let t = (dist - inner) / falloff;
        let factor = (1.0 - strength * smootherstep(t)).clamp(0.0, 1.0);

        for c in chunk.iter_mut().take(3) {
            *c = to_byte(to_unit(*c) * factor);
        }
    }
}

/// Punchy color: contrast boost followed by a saturation boost.
pub(crate) fn chrome(pixels: &mut [u8], contrast_amount: f32, saturation: f32) {
    let sat_factor = 1.0 + saturation / 100.0;
    map_rgb(pixels, |r, g, b| {
        let (r, g, b) = (
            contrast(r, contrast_amount),
            contrast(g, contrast_amount),
            contrast(b, contrast_amount),
        );
        let gray = luminance(r, g, b);
        (
            gray + (r - gray) * sat_factor,
            gray + (g - gray) * sat_factor,
            gray + (b - gray) * sat_factor,
        )
    });
}

/// High-contrast black and white.
pub(crate) fn noir(pixels: &mut [u8], contrast_amount: f32) {
    map_rgb(pixels, |r, g, b| {
        let v = contrast(luminance(r, g, b), contrast_amount);
        (v, v, v)
    });
}
