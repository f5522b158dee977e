//! Coffee preview WASM binding.
//!
//! Display-only: the host shows this instead of the raw texture while the
//! "Preview on Coffee" switch is on, and still saves the raw texture.

use crate::types::JsRgbaImage;
use latteart_core::preview;
use wasm_bindgen::prelude::*;

/// Render a processed texture as milk foam on a coffee background.
#[wasm_bindgen]
pub fn coffee_preview(image: &JsRgbaImage) -> JsRgbaImage {
    JsRgbaImage::from_decoded(preview::coffee_preview(&image.to_decoded()))
}
