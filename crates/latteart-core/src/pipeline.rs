//! The photo to latte art transform.
//!
//! ## Steps
//! 1. Square crop (zoom + offset), transparent outside the photo
//! 2. Lanczos3 resize to 512x512
//! 3. Brightness
//! 4. Contrast
//! 5. Alpha set aside
//! 6. Grayscale (BT.601 luma)
//! 7. Curve offset
//! 8. Luma replicated to RGB, saved alpha restored
//!
//! The transform is a pure function: it never mutates the source and keeps
//! no state between calls, so identical inputs give byte-identical output.

use crate::adjustments::{apply_brightness, apply_contrast};
use crate::curve::{apply_curve_offset, OffsetLut};
use crate::decode::{decode_image, resize, DecodeError, DecodedImage, FilterType};
use crate::luminance::to_luma;
use crate::transform::apply_square_crop;
use crate::TransformParameters;
use thiserror::Error;

/// Side length of the texture the game loads.
pub const OUTPUT_SIZE: u32 = 512;

/// Largest crop window, in pixels, the pipeline will allocate.
///
/// Matches the size at which Pillow refuses to open an image as a
/// decompression bomb (twice its 89,478,485 pixel warning level).
pub const MAX_CROP_PIXELS: u64 = 2 * 89_478_485;

/// Errors from the transform pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A numeric parameter is outside its valid domain.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The source cannot be turned into a raster of at least 1x1.
    #[error(transparent)]
    UnsupportedImage(#[from] DecodeError),
}

/// Reject parameters that would produce a degenerate crop or enhancement.
pub fn validate(params: &TransformParameters) -> Result<(), PipelineError> {
    positive("zoom", params.zoom)?;
    positive("brightness", params.brightness as f64)?;
    positive("contrast", params.contrast as f64)?;
    finite("offset", params.offset as f64)?;
    finite("offset_x", params.offset_x)?;
    finite("offset_y", params.offset_y)?;
    Ok(())
}

fn positive(name: &'static str, value: f64) -> Result<(), PipelineError> {
    finite(name, value)?;
    if value <= 0.0 {
        return Err(PipelineError::InvalidParameter {
            name,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

fn finite(name: &'static str, value: f64) -> Result<(), PipelineError> {
    if !value.is_finite() {
        return Err(PipelineError::InvalidParameter {
            name,
            value,
            reason: "must be a finite number",
        });
    }
    Ok(())
}

/// Turn `source` into a 512x512 latte art texture.
///
/// # Errors
///
/// * `PipelineError::InvalidParameter` if zoom, brightness or contrast is
///   not positive, any parameter is NaN or infinite, or the zoom frames a
///   window larger than [`MAX_CROP_PIXELS`]
/// * `PipelineError::UnsupportedImage` if the source has no pixels or its
///   buffer does not match its dimensions
pub fn process(
    source: &DecodedImage,
    params: &TransformParameters,
) -> Result<DecodedImage, PipelineError> {
    validate(params)?;

    if source.is_empty() {
        return Err(DecodeError::EmptyImage {
            width: source.width,
            height: source.height,
        }
        .into());
    }
    if source.pixels.len() != source.pixel_count() * 4 {
        return Err(DecodeError::UnsupportedImage(format!(
            "expected {} bytes of RGBA data for {}x{}, got {}",
            source.pixel_count() * 4,
            source.width,
            source.height,
            source.pixels.len()
        ))
        .into());
    }

    log::debug!(
        "Processing {}x{} source with {:?}",
        source.width,
        source.height,
        params
    );

    let window = params.crop_window(source.width, source.height);
    let crop_pixels = window.to_pixel_rect().area();
    if crop_pixels > MAX_CROP_PIXELS {
        log::warn!(
            "Rejecting zoom {}: {} crop pixels exceeds {}",
            params.zoom,
            crop_pixels,
            MAX_CROP_PIXELS
        );
        return Err(PipelineError::InvalidParameter {
            name: "zoom",
            value: params.zoom,
            reason: "crop window exceeds the pixel limit",
        });
    }

    let cropped = apply_square_crop(source, &window);
    let mut img = resize(cropped, OUTPUT_SIZE, OUTPUT_SIZE, FilterType::Lanczos3)?;

    apply_brightness(&mut img.pixels, params.brightness);
    apply_contrast(&mut img.pixels, params.contrast);

    let alpha = img.alpha_channel();
    let mut luma = to_luma(&img.pixels);
    apply_curve_offset(&mut luma, &OffsetLut::from_offset(params.offset));

    Ok(recompose(img.width, img.height, &luma, &alpha))
}

/// Decode `bytes` and run [`process`] on the result.
pub fn process_bytes(
    bytes: &[u8],
    params: &TransformParameters,
) -> Result<DecodedImage, PipelineError> {
    validate(params)?;
    let source = decode_image(bytes)?;
    process(&source, params)
}

/// Build an RGBA image with gray RGB from `luma` and alpha from `alpha`.
fn recompose(width: u32, height: u32, luma: &[u8], alpha: &[u8]) -> DecodedImage {
    let pixels = luma
        .iter()
        .zip(alpha)
        .flat_map(|(&l, &a)| [l, l, l, a])
        .collect();
    DecodedImage::new(width, height, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(brightness: f32, contrast: f32, offset: f32, zoom: f64) -> TransformParameters {
        TransformParameters {
            brightness,
            contrast,
            offset,
            zoom,
            ..Default::default()
        }
    }

    /// Gradient with a transparent corner.
    fn photo(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let a = if x < width / 4 && y < height / 4 { 0 } else { 255 };
                pixels.extend_from_slice(&[
                    ((x * 255) / width) as u8,
                    ((y * 255) / height) as u8,
                    ((x + y) % 256) as u8,
                    a,
                ]);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_output_shape() {
        for (w, h) in [(1, 1), (640, 480), (37, 300), (512, 512)] {
            let out = process(&photo(w, h), &TransformParameters::default()).unwrap();
            assert_eq!((out.width, out.height), (OUTPUT_SIZE, OUTPUT_SIZE));
            assert_eq!(out.pixels.len(), 512 * 512 * 4);
        }
    }

    #[test]
    fn test_default_params_are_deterministic() {
        let src = photo(120, 90);
        let a = process(&src, &TransformParameters::default()).unwrap();
        let b = process(&src, &TransformParameters::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_source_is_not_mutated() {
        let src = photo(50, 70);
        let copy = src.clone();
        let _ = process(&src, &TransformParameters::default()).unwrap();
        assert_eq!(src, copy);
    }

    #[test]
    fn test_output_is_gray() {
        let out = process(&photo(80, 60), &TransformParameters::default()).unwrap();
        for px in out.pixels.chunks_exact(4) {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
    }

    #[test]
    fn test_mid_gray_landscape_scenario() {
        let src = DecodedImage::filled(200, 100, [128, 128, 128, 255]);
        let out = process(&src, &params(1.0, 1.0, 50.0, 1.0)).unwrap();

        assert_eq!((out.width, out.height), (512, 512));

        // The photo covers rows 128..384 of the texture; stay clear of the
        // resampling fringe at its edges.
        for y in 140..372 {
            for x in 0..512 {
                assert_eq!(out.pixel(x, y), Some([78, 78, 78, 255]), "({x}, {y})");
            }
        }

        // Padding above and below the photo is cut out.
        for y in (0..118).chain(394..512) {
            for x in (0..512).step_by(7) {
                assert_eq!(out.pixel(x, y), Some([0, 0, 0, 0]), "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_square_source_fully_opaque() {
        let src = DecodedImage::filled(100, 100, [128, 128, 128, 255]);
        let out = process(&src, &params(1.0, 1.0, 50.0, 1.0)).unwrap();

        for px in out.pixels.chunks_exact(4) {
            assert_eq!(px, [78, 78, 78, 255]);
        }
    }

    #[test]
    fn test_zoom_out_border_is_transparent() {
        let src = DecodedImage::filled(100, 100, [200, 200, 200, 255]);
        let out = process(&src, &params(1.0, 1.0, 0.0, 2.0)).unwrap();

        // Source occupies the middle half: 128..384 on both axes
        for i in (0..110).chain(402..512) {
            assert_eq!(out.pixel(i, 256).map(|p| p[3]), Some(0), "x = {i}");
            assert_eq!(out.pixel(256, i).map(|p| p[3]), Some(0), "y = {i}");
            assert_eq!(out.pixel(i, i).map(|p| p[3]), Some(0), "diag {i}");
        }
        assert_eq!(out.pixel(256, 256), Some([200, 200, 200, 255]));
    }

    #[test]
    fn test_offset_shift_moves_photo() {
        let src = DecodedImage::filled(100, 100, [255, 255, 255, 255]);
        let mut p = params(1.0, 1.0, 0.0, 1.0);
        p.offset_x = 0.5;
        let out = process(&src, &p).unwrap();

        // Window shifted right by half its width: left half is photo, right half padding
        assert_eq!(out.pixel(100, 256).map(|p| p[3]), Some(255));
        assert_eq!(out.pixel(450, 256).map(|p| p[3]), Some(0));
    }

    #[test]
    fn test_increasing_offset_never_brightens() {
        let src = photo(64, 64);
        let low = process(&src, &params(1.8, 2.4, 10.0, 1.0)).unwrap();
        let high = process(&src, &params(1.8, 2.4, 80.0, 1.0)).unwrap();

        for (l, h) in low.pixels.chunks_exact(4).zip(high.pixels.chunks_exact(4)) {
            assert!(h[0] <= l[0]);
        }
    }

    #[test]
    fn test_levels_under_offset_become_black() {
        let src = photo(64, 64);
        let offset = 60.0;
        let base = process(&src, &params(1.5, 1.2, 0.0, 1.0)).unwrap();
        let shifted = process(&src, &params(1.5, 1.2, offset, 1.0)).unwrap();

        for (b, s) in base.pixels.chunks_exact(4).zip(shifted.pixels.chunks_exact(4)) {
            if b[0] as f32 <= offset {
                assert_eq!(s[0], 0);
            } else {
                assert_eq!(s[0], b[0] - offset as u8);
            }
        }
    }

    #[test]
    fn test_degenerate_zoom_rejected() {
        let src = photo(10, 10);
        for zoom in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = process(&src, &params(1.0, 1.0, 0.0, zoom));
            assert!(
                matches!(
                    result,
                    Err(PipelineError::InvalidParameter { name: "zoom", .. })
                ),
                "zoom = {zoom}"
            );
        }
    }

    #[test]
    fn test_far_offsets_give_transparent_texture() {
        let src = DecodedImage::filled(100, 100, [128, 128, 128, 255]);
        let mut p = TransformParameters::default();
        p.offset_x = 1e30;
        p.offset_y = -1e30;

        let out = process(&src, &p).unwrap();
        assert_eq!((out.width, out.height), (OUTPUT_SIZE, OUTPUT_SIZE));
        assert!(out.pixels.iter().all(|&v| v == 0));
    }

    #[test]
    fn test_oversized_crop_rejected() {
        let src = photo(10, 10);
        for zoom in [1e4, 1e300] {
            let result = process(&src, &params(1.0, 1.0, 0.0, zoom));
            assert!(
                matches!(
                    result,
                    Err(PipelineError::InvalidParameter { name: "zoom", .. })
                ),
                "zoom = {zoom}"
            );
        }
    }

    #[test]
    fn test_pixel_limit_boundary() {
        // 13377^2 = 178,944,129 pixels, just under the limit
        let src = DecodedImage::filled(1, 1, [255, 255, 255, 255]);
        let window = TransformParameters {
            zoom: 13377.0,
            ..Default::default()
        }
        .crop_window(1, 1);
        assert!(window.to_pixel_rect().area() <= MAX_CROP_PIXELS);

        let over = params(1.0, 1.0, 0.0, 13378.0);
        assert!(matches!(
            process(&src, &over),
            Err(PipelineError::InvalidParameter { name: "zoom", .. })
        ));
    }

    #[test]
    fn test_non_positive_enhancements_rejected() {
        let src = photo(10, 10);
        assert!(matches!(
            process(&src, &params(0.0, 1.0, 0.0, 1.0)),
            Err(PipelineError::InvalidParameter {
                name: "brightness",
                ..
            })
        ));
        assert!(matches!(
            process(&src, &params(1.0, -0.5, 0.0, 1.0)),
            Err(PipelineError::InvalidParameter {
                name: "contrast",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_offset_rejected() {
        let src = photo(10, 10);
        let mut p = TransformParameters::default();
        p.offset_y = f64::NAN;
        assert!(matches!(
            process(&src, &p),
            Err(PipelineError::InvalidParameter {
                name: "offset_y",
                ..
            })
        ));
    }

    #[test]
    fn test_empty_source_rejected() {
        let src = DecodedImage::new(0, 0, vec![]);
        assert!(matches!(
            process(&src, &TransformParameters::default()),
            Err(PipelineError::UnsupportedImage(DecodeError::EmptyImage { .. }))
        ));
    }

    #[test]
    fn test_mismatched_buffer_rejected() {
        let src = DecodedImage {
            width: 4,
            height: 4,
            pixels: vec![0; 10],
        };
        assert!(matches!(
            process(&src, &TransformParameters::default()),
            Err(PipelineError::UnsupportedImage(_))
        ));
    }

    #[test]
    fn test_process_bytes_rejects_garbage() {
        let result = process_bytes(b"not an image", &TransformParameters::default());
        assert!(matches!(result, Err(PipelineError::UnsupportedImage(_))));
    }

    #[test]
    fn test_process_bytes_png() {
        let src = image::RgbImage::from_pixel(30, 20, image::Rgb([128, 128, 128]));
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(src)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();

        let out = process_bytes(buf.get_ref(), &params(1.0, 1.0, 50.0, 1.0)).unwrap();
        assert_eq!(out.pixel(256, 256), Some([78, 78, 78, 255]));
    }

    #[test]
    fn test_error_display() {
        let err = PipelineError::InvalidParameter {
            name: "zoom",
            value: 0.0,
            reason: "must be greater than zero",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter zoom = 0: must be greater than zero"
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
