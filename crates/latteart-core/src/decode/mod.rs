//! Image decoding and resampling.
//!
//! This module provides functionality for:
//! - Decoding PNG, JPEG and BMP photos into RGBA rasters
//! - Resizing to the fixed texture resolution and to preview thumbnails
//!
//! # Architecture
//!
//! All operations are synchronous and single-threaded. Every function takes
//! its input by reference and returns a freshly allocated image, so callers
//! on different threads never share pixel buffers.

mod load;
mod resize;
mod types;

pub use load::{decode_image, from_dynamic_image};
pub use resize::{generate_thumbnail, resize, resize_to_fit};
pub use types::{DecodeError, DecodedImage, FilterType};
