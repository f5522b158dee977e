//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a PNG, JPEG or BMP photo to RGBA
//! - [`generate_thumbnail`] - Downscale the photo for the "Original Source" pane
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, generate_thumbnail } from '@latteart/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const photo = decode_image(bytes);
//! const thumb = generate_thumbnail(photo, 400);
//! ```

use crate::types::JsRgbaImage;
use latteart_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a photo from its file bytes.
///
/// The format is detected from the data. Sources without alpha come back
/// fully opaque.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image or the image is empty.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsRgbaImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsRgbaImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Generate a thumbnail that fits within `size` x `size`.
///
/// Images that already fit are returned unchanged.
#[wasm_bindgen]
pub fn generate_thumbnail(image: &JsRgbaImage, size: u32) -> Result<JsRgbaImage, JsValue> {
    decode::generate_thumbnail(&image.to_decoded(), size)
        .map(JsRgbaImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
