//! "Preview on coffee" overlay for the control panel.
//!
//! Shows roughly how a texture will look poured onto a cup: bright foam is
//! painted in milk color over a solid coffee background, dark areas show the
//! coffee. This is a display aid only; saved textures never go through it.

use crate::adjustments::blend_channel;
use crate::decode::DecodedImage;
use crate::luminance::to_luma;

/// Background color of the cup.
pub const COFFEE_RGB: [u8; 3] = [178, 104, 83];

/// Untinted milk color.
pub const MILK_RGB: [u8; 3] = [255, 221, 178];

/// Share of milk in the painted foam color; the rest is coffee.
pub const MILK_TINT: f32 = 0.85;

/// Luma below which the preview shows bare coffee.
pub const FOAM_THRESHOLD: u8 = 180;

/// Contrast boost applied to the foam mask.
pub const MASK_CONTRAST: f32 = 1.3;

/// Foam color: milk blended with a little coffee, truncated per channel.
pub fn foam_rgb() -> [u8; 3] {
    let mut out = [0u8; 3];
    for (i, c) in out.iter_mut().enumerate() {
        *c = (MILK_RGB[i] as f32 * MILK_TINT + COFFEE_RGB[i] as f32 * (1.0 - MILK_TINT)) as u8;
    }
    out
}

/// Render `image` as foam on coffee. The result is fully opaque.
///
/// The texture's own alpha is not consulted; only its gray level decides
/// where foam appears.
pub fn coffee_preview(image: &DecodedImage) -> DecodedImage {
    let mask = foam_mask(&image.pixels);
    let foam = foam_rgb();

    let pixels = mask
        .iter()
        .flat_map(|&m| {
            [
                mix(COFFEE_RGB[0], foam[0], m),
                mix(COFFEE_RGB[1], foam[1], m),
                mix(COFFEE_RGB[2], foam[2], m),
                255,
            ]
        })
        .collect();

    DecodedImage::new(image.width, image.height, pixels)
}

/// Thresholded, contrast-boosted luma used as paste mask.
fn foam_mask(pixels: &[u8]) -> Vec<u8> {
    let mut mask = to_luma(pixels);
    for m in mask.iter_mut() {
        if *m < FOAM_THRESHOLD {
            *m = 0;
        }
    }

    if !mask.is_empty() {
        let sum: u64 = mask.iter().map(|&m| m as u64).sum();
        let mean = (sum as f64 / mask.len() as f64 + 0.5) as u8 as f32;
        for m in mask.iter_mut() {
            *m = blend_channel(mean, *m, MASK_CONTRAST);
        }
    }

    mask
}

/// `(background * (255 - m) + foreground * m) / 255`, rounded.
#[inline]
fn mix(background: u8, foreground: u8, m: u8) -> u8 {
    let v = background as u32 * (255 - m as u32) + foreground as u32 * m as u32;
    let t = v + 128;
    (((t >> 8) + t) >> 8) as u8
}
