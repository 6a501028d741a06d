//! Base64 packaging with the corrected media type
//!
//! Pairs a file's detected media type with a base64 encoding of its full
//! content, ready for embedding in an API request body. Refuses to package
//! anything whose format can't be detected rather than guessing a type.

use crate::detect::detect_file;
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// An image's content encoded for embedding, tagged with the media type
/// detected from its magic bytes.
#[derive(Debug)]
pub struct EncodedImage {
    pub media_type: &'static str,
    pub data: String,
}

/// Read the image at `path` and return its base64-encoded content together
/// with the detected media type.
///
/// Fails with [`Error::UnrecognizedFormat`] when no signature matches, and
/// with [`Error::Io`] when the file can't be read; it never substitutes a
/// placeholder media type.
pub fn encode_image(path: &Path) -> Result<EncodedImage> {
    use base64::Engine as _;

    let format = detect_file(path)?
        .ok_or_else(|| Error::UnrecognizedFormat(path.display().to_string()))?;

    let content = fs::read(path)?;
    let data = base64::engine::general_purpose::STANDARD.encode(&content);

    Ok(EncodedImage {
        media_type: format.media_type(),
        data,
    })
}
