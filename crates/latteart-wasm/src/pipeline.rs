//! Latte art pipeline WASM bindings.
//!
//! The control panel keeps one `JsTransformParameters`, updates it from its
//! sliders and calls `process_latte_art` whenever a value changes.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const params = new JsTransformParameters();
//! params.offset = 35;
//! const texture = process_latte_art(photo, params);
//! label.textContent = `${parameter_percent("Curves Offset", params.offset)}%`;
//! ```

use crate::types::JsRgbaImage;
use latteart_core::{pipeline, Parameter, TransformParameters};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Pipeline parameters wrapper for JavaScript
#[wasm_bindgen]
pub struct JsTransformParameters {
    inner: TransformParameters,
}

#[wasm_bindgen]
impl JsTransformParameters {
    /// Create parameters at the default slider positions
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: TransformParameters::new(),
        }
    }

    /// Build parameters from a plain object such as `{ offset: 40, zoom: 0.5 }`.
    ///
    /// Missing fields take their defaults.
    pub fn from_js(value: JsValue) -> Result<JsTransformParameters, JsValue> {
        let inner: TransformParameters = serde_wasm_bindgen::from_value(value)
            .map_err(|e| JsValue::from_str(&format!("Invalid parameters: {}", e)))?;
        Ok(Self { inner })
    }

    /// Export as a plain object with camelCase keys.
    pub fn to_js(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get brightness value
    #[wasm_bindgen(getter)]
    pub fn brightness(&self) -> f32 {
        self.inner.brightness
    }

    /// Set brightness value
    #[wasm_bindgen(setter)]
    pub fn set_brightness(&mut self, value: f32) {
        self.inner.brightness = value;
    }

    /// Get contrast value
    #[wasm_bindgen(getter)]
    pub fn contrast(&self) -> f32 {
        self.inner.contrast
    }

    /// Set contrast value
    #[wasm_bindgen(setter)]
    pub fn set_contrast(&mut self, value: f32) {
        self.inner.contrast = value;
    }

    /// Get curve offset value
    #[wasm_bindgen(getter)]
    pub fn offset(&self) -> f32 {
        self.inner.offset
    }

    /// Set curve offset value
    #[wasm_bindgen(setter)]
    pub fn set_offset(&mut self, value: f32) {
        self.inner.offset = value;
    }

    /// Get zoom value
    #[wasm_bindgen(getter)]
    pub fn zoom(&self) -> f64 {
        self.inner.zoom
    }

    /// Set zoom value
    #[wasm_bindgen(setter)]
    pub fn set_zoom(&mut self, value: f64) {
        self.inner.zoom = value;
    }

    /// Get horizontal crop shift
    #[wasm_bindgen(getter)]
    pub fn offset_x(&self) -> f64 {
        self.inner.offset_x
    }

    /// Set horizontal crop shift
    #[wasm_bindgen(setter)]
    pub fn set_offset_x(&mut self, value: f64) {
        self.inner.offset_x = value;
    }

    /// Get vertical crop shift
    #[wasm_bindgen(getter)]
    pub fn offset_y(&self) -> f64 {
        self.inner.offset_y
    }

    /// Set vertical crop shift
    #[wasm_bindgen(setter)]
    pub fn set_offset_y(&mut self, value: f64) {
        self.inner.offset_y = value;
    }

    /// Restore all sliders to their defaults
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        self.inner.is_default()
    }
}

impl Default for JsTransformParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the latte art pipeline on `image`.
///
/// Returns a new 512x512 RGBA texture; `image` is left untouched.
///
/// # Errors
///
/// Returns an error for non-positive zoom, brightness or contrast, non-finite
/// values, or an empty image.
#[wasm_bindgen]
pub fn process_latte_art(
    image: &JsRgbaImage,
    params: &JsTransformParameters,
) -> Result<JsRgbaImage, JsValue> {
    pipeline::process(&image.to_decoded(), &params.inner)
        .map(JsRgbaImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Percentage label for a slider, looked up by its label text.
#[wasm_bindgen]
pub fn parameter_percent(label: &str, value: f64) -> Result<i32, JsValue> {
    Parameter::from_label(label)
        .map(|p| p.percent(value))
        .ok_or_else(|| JsValue::from_str(&format!("Unknown parameter: {}", label)))
}

/// Slider descriptor sent to the host UI.
#[derive(Debug, Serialize)]
struct SliderJs {
    label: &'static str,
    min: f64,
    max: f64,
    default: f64,
}

fn slider_descriptors() -> Vec<SliderJs> {
    Parameter::ALL
        .into_iter()
        .map(|p| {
            let range = p.range();
            SliderJs {
                label: p.label(),
                min: range.min,
                max: range.max,
                default: range.default,
            }
        })
        .collect()
}

/// Slider layout for the control panel: `[{label, min, max, default}, ...]`.
#[wasm_bindgen]
pub fn parameter_sliders() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&slider_descriptors())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
