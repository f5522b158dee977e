//! Image encoding WASM bindings.
//!
//! Encodes processed textures as the RGBA PNG the game loads, so the host
//! can offer them for download or hand them to a native save bridge.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@latteart/wasm';
//!
//! const png = encode_png(texture);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsRgbaImage;
use latteart_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsRgbaImage to PNG bytes.
///
/// # Errors
///
/// Returns an error if the image has a zero dimension or its pixel buffer
/// does not match its size.
#[wasm_bindgen]
pub fn encode_png(image: &JsRgbaImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_image_png(&image.to_decoded()).map_err(|e| JsValue::from_str(&e.to_string()))
}
