//! Luma calculation using ITU-R BT.601 coefficients.
//!
//! The game reads foam depth from the gray level of each texel, so the
//! grayscale conversion has to match the classic 8-bit "L" conversion
//! bit for bit. It is done in 16.16 fixed point with round-half-up.

/// BT.601 red weight (0.299) in 16.16 fixed point.
pub const LUMA_R: u32 = 19595;

/// BT.601 green weight (0.587) in 16.16 fixed point.
pub const LUMA_G: u32 = 38470;

/// BT.601 blue weight (0.114) in 16.16 fixed point.
pub const LUMA_B: u32 = 7471;

/// Calculate luma from u8 RGB values (0 to 255).
#[inline]
pub fn luma_u8(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * LUMA_R + g as u32 * LUMA_G + b as u32 * LUMA_B + 0x8000) >> 16) as u8
}

/// Convert RGBA pixel data to one luma byte per pixel. Alpha is ignored.
pub fn to_luma(pixels: &[u8]) -> Vec<u8> {
    pixels
        .chunks_exact(4)
        .map(|px| luma_u8(px[0], px[1], px[2]))
        .collect()
}

/// Mean luma of RGBA pixel data, rounded half-up to an integer level.
///
/// Transparent pixels take part like any other; returns 0 for no pixels.
pub fn mean_luma(pixels: &[u8]) -> u8 {
    let count = pixels.len() / 4;
    if count == 0 {
        return 0;
    }
    let sum: u64 = pixels
        .chunks_exact(4)
        .map(|px| luma_u8(px[0], px[1], px[2]) as u64)
        .sum();
    let mean = sum as f64 / count as f64;
    (mean + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coefficients_sum_to_one() {
        assert_eq!(LUMA_R + LUMA_G + LUMA_B, 1 << 16);
    }

    #[test]
    fn test_luma_gray_preserves_value() {
        for v in 0..=255u8 {
            assert_eq!(luma_u8(v, v, v), v);
        }
    }

    #[test]
    fn test_luma_primaries() {
        // 0.299 * 255 = 76.2
        assert_eq!(luma_u8(255, 0, 0), 76);
        // 0.587 * 255 = 149.7
        assert_eq!(luma_u8(0, 255, 0), 150);
        // 0.114 * 255 = 29.1
        assert_eq!(luma_u8(0, 0, 255), 29);
    }

    #[test]
    fn test_to_luma_ignores_alpha() {
        let pixels = [255, 255, 255, 0, 0, 0, 0, 255];
        assert_eq!(to_luma(&pixels), vec![255, 0]);
    }

    #[test]
    fn test_mean_luma_rounds_half_up() {
        // Levels 0 and 1 average to 0.5 -> 1
        let pixels = [0, 0, 0, 255, 1, 1, 1, 255];
        assert_eq!(mean_luma(&pixels), 1);

        let pixels = [10, 10, 10, 255, 20, 20, 20, 255, 30, 30, 30, 255];
        assert_eq!(mean_luma(&pixels), 20);
    }

    #[test]
    fn test_mean_luma_empty() {
        assert_eq!(mean_luma(&[]), 0);
    }
}
