//! Image encoding for the game's texture format.
//!
//! This module provides functionality for:
//! - Encoding RGBA textures to 8-bit PNG, the only format the game loads
//!
//! All operations are synchronous and work on in-memory buffers; writing
//! the bytes to disk is left to the caller.

mod png;

pub use png::{encode_image_png, encode_png, EncodeError};
