//! Image media type detection by magic bytes
//!
//! Identifies the actual format of an image file from its leading bytes
//! rather than trusting the filename, and pairs the corrected media type
//! with base64-encoded content for embedding. Fixes images incorrectly
//! tagged as "image/webp" (or anything else) when they are really PNG,
//! JPEG, or another format.

pub mod detect;
pub mod encode;
pub mod error;

pub use detect::{classify, detect_file, ImageFormat};
pub use encode::{encode_image, EncodedImage};
pub use error::{Error, Result};
