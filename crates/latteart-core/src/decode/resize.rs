//! Image resizing for the output texture and on-screen thumbnails.
//!
//! Resampling is done on premultiplied alpha so that fully transparent
//! padding does not darken the colors of neighbouring opaque pixels.
//! [`resize`] consumes its input and premultiplies in place, so a large
//! padded crop is never copied before resampling.

use super::{DecodeError, DecodedImage, FilterType};

/// Resize an image to exact dimensions.
///
/// # Arguments
///
/// * `image` - The source image to resize
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `filter` - Interpolation filter to use
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if a target dimension is zero.
pub fn resize(
    image: DecodedImage,
    width: u32,
    height: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    if image.width == width && image.height == height {
        return Ok(image);
    }

    let premultiplied = premultiply(image)
        .into_rgba_image()
        .ok_or_else(|| DecodeError::UnsupportedImage("Failed to create RgbaImage".to_string()))?;

    let resized =
        image::imageops::resize(&premultiplied, width, height, filter.to_image_filter());

    Ok(unpremultiply(DecodedImage::from_rgba_image(resized)))
}

/// Resize an image to fit within a maximum edge length while preserving aspect ratio.
///
/// If the image is already smaller than `max_edge`, it is returned unchanged.
///
/// # Errors
///
/// Returns `DecodeError::EmptyImage` if `max_edge` is zero.
pub fn resize_to_fit(
    image: &DecodedImage,
    max_edge: u32,
    filter: FilterType,
) -> Result<DecodedImage, DecodeError> {
    if max_edge == 0 {
        return Err(DecodeError::EmptyImage {
            width: max_edge,
            height: max_edge,
        });
    }

    let (src_width, src_height) = (image.width, image.height);

    if src_width <= max_edge && src_height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = calculate_fit_dimensions(src_width, src_height, max_edge);

    resize(image.clone(), new_width, new_height, filter)
}

/// Generate a thumbnail of the source photo for the control panel.
///
/// Uses bilinear interpolation for speed.
pub fn generate_thumbnail(image: &DecodedImage, size: u32) -> Result<DecodedImage, DecodeError> {
    resize_to_fit(image, size, FilterType::Bilinear)
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (max_edge, new_height.max(1))
    } else {
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), max_edge)
    }
}

/// Scale color channels by alpha, rounding to nearest.
fn premultiply(mut image: DecodedImage) -> DecodedImage {
    for px in image.pixels.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = mul_div_255(*c as u32, a);
        }
    }
    image
}

/// Undo `premultiply`. Pixels with alpha 0 or 255 are left untouched.
fn unpremultiply(mut image: DecodedImage) -> DecodedImage {
    for px in image.pixels.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((255 * *c as u32) / a).min(255) as u8;
        }
    }
    image
}

#[inline]
fn mul_div_255(value: u32, alpha: u32) -> u8 {
    let t = value * alpha + 128;
    (((t >> 8) + t) >> 8) as u8
}
