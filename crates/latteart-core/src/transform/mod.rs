//! Crop geometry for the latte art texture.
//!
//! The pipeline frames the photo with a square window before any resampling
//! or tonal work happens.
//!
//! # Coordinate System
//!
//! - Window coordinates are in source pixels, origin top-left
//! - Coordinates outside the source are valid and produce transparent padding

mod crop;

pub use crop::{apply_square_crop, crop_padded, CropWindow, PixelRect};
