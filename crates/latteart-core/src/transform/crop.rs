//! Square crop window and padded cropping.
//!
//! The crop window is always a square whose side is a fraction (`zoom`) of
//! the source's longer dimension, centered on the source and optionally
//! shifted by a normalized offset. The window may extend past the source in
//! any direction; the uncovered area is filled with transparent pixels.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner of the source image
//! - Window coordinates are in source pixels and may be negative
//! - Offsets are fractions of the window side (0.5 = half a window)
//! - A window shifted entirely off the source is pulled back to just past
//!   the nearest edge; its contents are all padding either way

use crate::decode::DecodedImage;

/// Square crop window in source pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropWindow {
    /// Left edge (may be negative).
    pub left: f64,
    /// Top edge (may be negative).
    pub top: f64,
    /// Side length of the square.
    pub size: f64,
}

/// Integer crop rectangle, right/bottom exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl PixelRect {
    pub fn width(&self) -> u32 {
        span(self.x0, self.x1)
    }

    pub fn height(&self) -> u32 {
        span(self.y0, self.y1)
    }

    /// Number of pixels covered, without overflow for any rectangle.
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}

fn span(start: i64, end: i64) -> u32 {
    end.saturating_sub(start).clamp(0, u32::MAX as i64) as u32
}

impl CropWindow {
    /// Compute the square window framing `zoom` of the longer side.
    ///
    /// At `zoom = 1.0` with no offset the whole longer dimension is framed
    /// and the shorter one is centered.
    pub fn square(width: u32, height: u32, zoom: f64, offset_x: f64, offset_y: f64) -> Self {
        let max_dim = width.max(height) as f64;
        let size = max_dim * zoom;

        let left = (width as f64 - size) / 2.0 + offset_x * size;
        let top = (height as f64 - size) / 2.0 + offset_y * size;

        Self {
            left: left.max(-size - 1.0).min(width as f64 + 1.0),
            top: top.max(-size - 1.0).min(height as f64 + 1.0),
            size,
        }
    }

    /// Snap the window edges to whole pixels.
    ///
    /// Each edge is rounded half-to-even. The rectangle is never narrower
    /// than one pixel. Edges beyond the `i64` range saturate.
    pub fn to_pixel_rect(&self) -> PixelRect {
        let x0 = self.left.round_ties_even() as i64;
        let y0 = self.top.round_ties_even() as i64;
        let x1 = ((self.left + self.size).round_ties_even() as i64).max(x0.saturating_add(1));
        let y1 = ((self.top + self.size).round_ties_even() as i64).max(y0.saturating_add(1));
        PixelRect { x0, y0, x1, y1 }
    }
}

/// Copy `rect` out of `image`, padding with transparent pixels.
///
/// Every output pixel whose source coordinate lies outside the image is
/// `(0, 0, 0, 0)`; nothing is clamped to the edge or wrapped around.
pub fn crop_padded(image: &DecodedImage, rect: PixelRect) -> DecodedImage {
    let out_width = rect.width();
    let out_height = rect.height();
    let mut output = DecodedImage::transparent(out_width, out_height);

    // Overlap of the rectangle with the source, in source coordinates
    let src_x0 = rect.x0.clamp(0, image.width as i64);
    let src_x1 = rect.x1.clamp(0, image.width as i64);
    let src_y0 = rect.y0.clamp(0, image.height as i64);
    let src_y1 = rect.y1.clamp(0, image.height as i64);

    if src_x0 >= src_x1 || src_y0 >= src_y1 {
        return output;
    }

    let span = ((src_x1 - src_x0) * 4) as usize;
    let dst_x = ((src_x0 - rect.x0) * 4) as usize;

    // Copy pixel data row by row
    for src_y in src_y0..src_y1 {
        let dst_y = (src_y - rect.y0) as usize;
        let src_start = ((src_y as usize) * (image.width as usize) + src_x0 as usize) * 4;
        let dst_start = dst_y * (out_width as usize) * 4 + dst_x;

        output.pixels[dst_start..dst_start + span]
            .copy_from_slice(&image.pixels[src_start..src_start + span]);
    }

    output
}

/// Crop `image` to the square `window`.
pub fn apply_square_crop(image: &DecodedImage, window: &CropWindow) -> DecodedImage {
    let rect = window.to_pixel_rect();
    log::debug!(
        "Cropping {}x{} source to ({}, {})-({}, {})",
        image.width,
        image.height,
        rect.x0,
        rect.y0,
        rect.x1,
        rect.y1
    );
    crop_padded(image, rect)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
