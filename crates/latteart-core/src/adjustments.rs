//! Brightness and contrast enhancement.
//!
//! Both adjustments are expressed as a blend between the image and a flat
//! "degenerate" image:
//!
//! `output = degenerate + factor * (input - degenerate)`
//!
//! computed in f32, truncated toward zero and clamped to 0..=255.
//!
//! ## Degenerate images
//! - Brightness: black, so the blend is a plain multiply
//! - Contrast: the image's own mean luma, so contrast pivots around the
//!   average gray level of this particular image
//!
//! Alpha is never modified.

use crate::luminance::mean_luma;

/// Scale RGB of every pixel by `factor`.
///
/// # Arguments
/// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
/// * `factor` - Multiplier; 1.0 leaves the image unchanged
pub fn apply_brightness(pixels: &mut [u8], factor: f32) {
    if factor == 1.0 {
        return;
    }

    for px in pixels.chunks_exact_mut(4) {
        for c in &mut px[..3] {
            *c = blend_channel(0.0, *c, factor);
        }
    }
}

/// Stretch RGB of every pixel away from the image's mean luma by `factor`.
///
/// The mean is taken over every pixel including transparent padding.
pub fn apply_contrast(pixels: &mut [u8], factor: f32) {
    if factor == 1.0 {
        return;
    }

    let mean = mean_luma(pixels) as f32;
    for px in pixels.chunks_exact_mut(4) {
        for c in &mut px[..3] {
            *c = blend_channel(mean, *c, factor);
        }
    }
}

#[inline]
pub(crate) fn blend_channel(degenerate: f32, value: u8, factor: f32) -> u8 {
    let out = degenerate + factor * (value as f32 - degenerate);
    if out <= 0.0 {
        0
    } else if out >= 255.0 {
        255
    } else {
        out as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brightness_identity() {
        let mut pixels = vec![12, 34, 56, 78];
        apply_brightness(&mut pixels, 1.0);
        assert_eq!(pixels, vec![12, 34, 56, 78]);
    }

    #[test]
    fn test_brightness_scales_and_truncates() {
        let mut pixels = vec![100, 101, 0, 77];
        apply_brightness(&mut pixels, 1.8);
        // 180.0, 181.8 -> 181, 0
        assert_eq!(pixels, vec![180, 181, 0, 77]);
    }

    #[test]
    fn test_brightness_clamps_high() {
        let mut pixels = vec![200, 255, 150, 255];
        apply_brightness(&mut pixels, 3.0);
        assert_eq!(pixels, vec![255, 255, 255, 255]);
    }

    #[test]
    fn test_brightness_darkens_below_one() {
        let mut pixels = vec![200, 101, 3, 10];
        apply_brightness(&mut pixels, 0.5);
        assert_eq!(pixels, vec![100, 50, 1, 10]);
    }

    #[test]
    fn test_contrast_identity() {
        let mut pixels = vec![12, 34, 56, 78, 200, 100, 0, 255];
        apply_contrast(&mut pixels, 1.0);
        assert_eq!(pixels, vec![12, 34, 56, 78, 200, 100, 0, 255]);
    }

    #[test]
    fn test_contrast_pivots_on_mean() {
        // Mean luma of levels 100 and 200 is 150
        let mut pixels = vec![100, 100, 100, 255, 200, 200, 200, 255];
        apply_contrast(&mut pixels, 2.0);
        // 150 + 2 * (100 - 150) = 50, 150 + 2 * (200 - 150) = 250
        assert_eq!(pixels, vec![50, 50, 50, 255, 250, 250, 250, 255]);
    }

    #[test]
    fn test_contrast_uniform_image_unchanged() {
        let mut pixels = vec![90, 90, 90, 255].repeat(16);
        let original = pixels.clone();
        apply_contrast(&mut pixels, 2.4);
        assert_eq!(pixels, original);
    }

    #[test]
    fn test_contrast_counts_transparent_pixels_in_mean() {
        // Mean luma of 0 and 200 is 100
        let mut pixels = vec![0, 0, 0, 0, 200, 200, 200, 255];
        apply_contrast(&mut pixels, 1.5);
        // 100 + 1.5 * (0 - 100) < 0 -> 0, 100 + 1.5 * 100 = 250
        assert_eq!(pixels, vec![0, 0, 0, 0, 250, 250, 250, 255]);
    }

    #[test]
    fn test_adjustments_never_touch_alpha() {
        let mut pixels = vec![10, 200, 30, 0, 40, 50, 250, 128, 255, 0, 0, 255];
        apply_brightness(&mut pixels, 2.7);
        apply_contrast(&mut pixels, 0.6);
        let alpha: Vec<u8> = pixels.chunks_exact(4).map(|p| p[3]).collect();
        assert_eq!(alpha, vec![0, 128, 255]);
    }
}
