//! Image format detection from file magic bytes
//!
//! Classifies a file's leading bytes against an ordered signature table and
//! maps the result to a canonical media type. Detection never looks at the
//! filename, so a PNG uploaded as `something.webp` still comes back as
//! "image/png".

use crate::Result;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// How many leading bytes are needed to match any signature in the table.
pub const HEADER_LEN: usize = 12;

/// Image formats recognized by the signature table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
    WebP,
    Gif,
    Bmp,
    Ico,
    Tiff,
}

impl ImageFormat {
    /// Canonical MIME type string for this format.
    pub fn media_type(&self) -> &'static str {
        match self {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Bmp => "image/bmp",
            ImageFormat::Ico => "image/x-icon",
            ImageFormat::Tiff => "image/tiff",
        }
    }

    /// File extension (without leading dot) matching the detected content,
    /// for callers that rename mislabeled uploads.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::WebP => "webp",
            ImageFormat::Gif => "gif",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Ico => "ico",
            ImageFormat::Tiff => "tiff",
        }
    }
}

/// One signature rule: every `(offset, pattern)` part must match for the
/// rule to classify as `format`.
struct Signature {
    format: ImageFormat,
    parts: &'static [(usize, &'static [u8])],
}

impl Signature {
    fn matches(&self, header: &[u8]) -> bool {
        self.parts
            .iter()
            .all(|&(offset, pattern)| header.get(offset..offset + pattern.len()) == Some(pattern))
    }
}

/// Signature table, evaluated top to bottom; first match wins.
///
/// Order matters: WEBP shares the "RIFF" prefix with WAV and AVI and must
/// be checked before any short-prefix rule, and TIFF's bare two-byte endian
/// markers go last as the least specific. Formats with alternative magics
/// (GIF, TIFF) get one row per alternative.
const SIGNATURES: &[Signature] = &[
    Signature {
        format: ImageFormat::Png,
        parts: &[(0, &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])],
    },
    Signature {
        format: ImageFormat::Jpeg,
        parts: &[(0, &[0xFF, 0xD8, 0xFF])],
    },
    Signature {
        format: ImageFormat::WebP,
        parts: &[(0, b"RIFF"), (8, b"WEBP")],
    },
    Signature {
        format: ImageFormat::Gif,
        parts: &[(0, b"GIF87a")],
    },
    Signature {
        format: ImageFormat::Gif,
        parts: &[(0, b"GIF89a")],
    },
    Signature {
        format: ImageFormat::Bmp,
        parts: &[(0, b"BM")],
    },
    Signature {
        format: ImageFormat::Ico,
        parts: &[(0, &[0x00, 0x00, 0x01, 0x00])],
    },
    Signature {
        format: ImageFormat::Tiff,
        parts: &[(0, b"II")],
    },
    Signature {
        format: ImageFormat::Tiff,
        parts: &[(0, b"MM")],
    },
];

/// Classify a header window against the signature table.
///
/// Pure function of the supplied bytes. A rule whose pattern extends past
/// the end of the slice simply fails to match; missing bytes are never
/// treated as padding or as an error. Returns `None` when no rule matches,
/// which is a valid result (SVG, HEIC, a text file), not a failure.
pub fn classify(header: &[u8]) -> Option<ImageFormat> {
    SIGNATURES
        .iter()
        .find(|signature| signature.matches(header))
        .map(|signature| signature.format)
}

/// Read the header window (up to [`HEADER_LEN`] bytes) from a file.
pub fn read_header(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    Ok(header)
}

/// Detect the image format of the file at `path`.
///
/// `Err` means the file could not be read; `Ok(None)` means the file was
/// read but no signature matched. Neither outcome is ever replaced with a
/// guessed default media type.
pub fn detect_file(path: &Path) -> Result<Option<ImageFormat>> {
    let header = read_header(path)?;
    let format = classify(&header);
    if format.is_none() {
        tracing::warn!(
            "Unrecognized image format in {} (first 4 bytes: {:02X?})",
            path.display(),
            &header[..header.len().min(4)]
        );
    }
    Ok(format)
}
