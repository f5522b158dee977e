//! Decoding of user-supplied photos into RGBA rasters.
//!
//! The container format is sniffed from the bytes, so PNG, JPEG and BMP
//! files can be handed over without an extension hint. Whatever the source
//! channel layout, the result is always 8-bit RGBA; sources without alpha
//! come out fully opaque.

use super::{DecodeError, DecodedImage};
use image::DynamicImage;

/// Decode encoded image bytes into an RGBA image.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedImage` if the format is not recognized or
/// the data is corrupt, and `DecodeError::EmptyImage` if the decoded raster
/// has a zero dimension.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| DecodeError::UnsupportedImage(e.to_string()))?;

    log::debug!(
        "Decoded {}x{} source ({:?})",
        img.width(),
        img.height(),
        img.color()
    );

    from_dynamic_image(img)
}

/// Normalize an already-decoded image to RGBA.
///
/// Grayscale, RGB and 16-bit sources are converted; a missing alpha channel
/// is synthesized as 255.
pub fn from_dynamic_image(img: DynamicImage) -> Result<DecodedImage, DecodeError> {
    let (width, height) = (img.width(), img.height());
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}
