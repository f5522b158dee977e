//! Latte Art WASM - WebAssembly bindings for the latte art control panel
//!
//! This crate exposes latteart-core to a browser-hosted UI so the preview can
//! be re-rendered on every slider change without a round trip to a server.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper type for RGBA images
//! - `decode` - Photo decoding and source thumbnails
//! - `pipeline` - Parameters and the texture pipeline
//! - `preview` - "Preview on coffee" overlay
//! - `encode` - PNG encoding of finished textures
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, process_latte_art, JsTransformParameters } from '@latteart/wasm';
//!
//! await init();
//!
//! const photo = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const texture = process_latte_art(photo, new JsTransformParameters());
//! ctx.putImageData(new ImageData(texture.to_image_data_array(), 512, 512), 0, 0);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
#[cfg(target_arch = "wasm32")]
mod logger;
mod pipeline;
mod preview;
mod types;

// Re-export public types
pub use decode::{decode_image, generate_thumbnail};
pub use encode::encode_png;
pub use pipeline::{
    parameter_percent, parameter_sliders, process_latte_art, JsTransformParameters,
};
pub use preview::coffee_preview;
pub use types::JsRgbaImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    logger::install(log::LevelFilter::Info);
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Side length of every texture produced by `process_latte_art`
#[wasm_bindgen]
pub fn output_size() -> u32 {
    latteart_core::OUTPUT_SIZE
}
