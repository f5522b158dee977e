//! Latte Art Core - Photo to latte art texture library
//!
//! This crate turns an arbitrary photo into the 512x512 RGBA texture that
//! Espresso Tycoon loads as custom latte art: gray level encodes foam depth,
//! alpha encodes the cup cutout. It also knows where the game keeps its save
//! slots and how to drop a finished texture into one.

pub mod adjustments;
pub mod curve;
pub mod decode;
pub mod encode;
pub mod luminance;
pub mod pipeline;
pub mod preview;
pub mod transform;

#[cfg(feature = "desktop")]
pub mod export;
#[cfg(feature = "desktop")]
pub mod slots;

pub use curve::{apply_curve_offset, OffsetLut};
pub use decode::{decode_image, DecodeError, DecodedImage};
pub use pipeline::{process, process_bytes, PipelineError, MAX_CROP_PIXELS, OUTPUT_SIZE};
pub use preview::coffee_preview;
pub use transform::{CropWindow, PixelRect};

/// Parameters of one pipeline run.
///
/// Deserializes from camelCase JSON; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransformParameters {
    /// RGB multiplier (> 0, slider 0.5 to 3.0)
    pub brightness: f32,
    /// Contrast factor around the mean gray (> 0, slider 0.5 to 3.0)
    pub contrast: f32,
    /// Luma subtracted by the curve offset (slider 0 to 150)
    pub offset: f32,
    /// Crop side as a fraction of the longer image side (> 0, slider 1.0 to 0.1)
    pub zoom: f64,
    /// Horizontal crop shift in window widths
    pub offset_x: f64,
    /// Vertical crop shift in window heights
    pub offset_y: f64,
}

impl Default for TransformParameters {
    fn default() -> Self {
        Self {
            brightness: Parameter::Brightness.range().default as f32,
            contrast: Parameter::Contrast.range().default as f32,
            offset: Parameter::Offset.range().default as f32,
            zoom: Parameter::Zoom.range().default,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl TransformParameters {
    /// Create parameters with the default slider positions
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if all values are at their defaults
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Restore every value to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Crop window these parameters select on a `width` x `height` source.
    pub fn crop_window(&self, width: u32, height: u32) -> CropWindow {
        CropWindow::square(width, height, self.zoom, self.offset_x, self.offset_y)
    }
}

/// Slider bounds and starting value for one parameter.
///
/// `min` is the slider's left end and may be larger than `max`
/// (the zoom slider runs from 1.0 down to 0.1).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

/// The user-facing parameters of the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Parameter {
    Brightness,
    Contrast,
    Offset,
    Zoom,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::Brightness,
        Parameter::Contrast,
        Parameter::Offset,
        Parameter::Zoom,
    ];

    pub fn range(self) -> ParameterRange {
        match self {
            Parameter::Brightness => ParameterRange {
                min: 0.5,
                max: 3.0,
                default: 1.8,
            },
            Parameter::Contrast => ParameterRange {
                min: 0.5,
                max: 3.0,
                default: 2.4,
            },
            Parameter::Offset => ParameterRange {
                min: 0.0,
                max: 150.0,
                default: 20.0,
            },
            Parameter::Zoom => ParameterRange {
                min: 1.0,
                max: 0.1,
                default: 1.0,
            },
        }
    }

    /// Slider label
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Brightness => "Brightness",
            Parameter::Contrast => "Contrast",
            Parameter::Offset => "Curves Offset",
            Parameter::Zoom => "Zoom / Scale",
        }
    }

    /// Look up a parameter by its label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Percentage shown next to the slider.
    ///
    /// Zoom shows the fraction of the image kept; the others show the
    /// position along the slider. Truncated toward zero.
    pub fn percent(self, value: f64) -> i32 {
        match self {
            Parameter::Zoom => (value * 100.0) as i32,
            _ => {
                let range = self.range();
                ((value - range.min) / (range.max - range.min) * 100.0) as i32
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_default() {
        let params = TransformParameters::new();
        assert!(params.is_default());
        assert_eq!(params.brightness, 1.8);
        assert_eq!(params.contrast, 2.4);
        assert_eq!(params.offset, 20.0);
        assert_eq!(params.zoom, 1.0);
        assert_eq!(params.offset_x, 0.0);
        assert_eq!(params.offset_y, 0.0);
    }

    #[test]
    fn test_parameters_reset() {
        let mut params = TransformParameters::new();
        params.zoom = 0.3;
        params.offset = 99.0;
        assert!(!params.is_default());

        params.reset();
        assert!(params.is_default());
    }

    #[test]
    fn test_parameters_deserialize_partial_json() {
        let json = r#"{"offset": 50, "offsetX": 0.25}"#;
        let params: TransformParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.offset, 50.0);
        assert_eq!(params.offset_x, 0.25);
        assert_eq!(params.brightness, 1.8);
        assert_eq!(params.zoom, 1.0);
    }

    #[test]
    fn test_parameters_serialize_camel_case() {
        let json = serde_json::to_string(&TransformParameters::new()).unwrap();
        assert!(json.contains("\"offsetX\":0.0"));
        assert!(json.contains("\"offsetY\":0.0"));
    }

    #[test]
    fn test_crop_window_uses_zoom_and_offsets() {
        let mut params = TransformParameters::new();
        params.zoom = 0.5;
        params.offset_y = 0.5;
        let window = params.crop_window(100, 100);
        assert_eq!(window.size, 50.0);
        assert_eq!(window.left, 25.0);
        assert_eq!(window.top, 50.0);
    }

    #[test]
    fn test_percent_labels() {
        assert_eq!(Parameter::Brightness.percent(1.8), 52);
        assert_eq!(Parameter::Contrast.percent(2.4), 76);
        assert_eq!(Parameter::Offset.percent(20.0), 13);
        assert_eq!(Parameter::Zoom.percent(1.0), 100);
        assert_eq!(Parameter::Zoom.percent(0.25), 25);
    }

    #[test]
    fn test_parameter_labels_roundtrip() {
        for p in Parameter::ALL {
            assert_eq!(Parameter::from_label(p.label()), Some(p));
        }
        assert_eq!(Parameter::from_label("Saturation"), None);
    }

    #[test]
    fn test_defaults_lie_within_ranges() {
        for p in Parameter::ALL {
            let r = p.range();
            let (lo, hi) = if r.min <= r.max { (r.min, r.max) } else { (r.max, r.min) };
            assert!(r.default >= lo && r.default <= hi, "{:?}", p);
        }
    }
}
