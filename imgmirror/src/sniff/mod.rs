//! Byte-signature image format detection.
//!
//! Given the leading bytes of a downloaded file, [`resolve_extension`]
//! returns the canonical file extension for its actual format, regardless of
//! what the source URL claimed. Detection is magic-number based: the buffer
//! is matched against known signatures and the resulting MIME type is
//! resolved through a static subtype → extension table.
//!
//! This is a best-effort heuristic, not a format validator. Ambiguous or
//! exotic signatures resolve to the default extension rather than failing.

mod table;

use table::extension_for_subtype;

/// Number of leading bytes inspected for format detection.
pub const SNIFF_LEN: usize = 512;

/// Extension used when no known signature is recognized.
pub const DEFAULT_EXTENSION: &str = "jpg";

/// Resolve the canonical extension for a byte buffer.
///
/// Buffers shorter than [`SNIFF_LEN`] are fine; an empty or unrecognizable
/// buffer yields [`DEFAULT_EXTENSION`]. A detected `jpeg` is normalized to
/// `jpg`.
pub fn resolve_extension(buf: &[u8]) -> &'static str {
    let Ok(format) = image::guess_format(buf) else {
        return DEFAULT_EXTENSION;
    };

    let mime = format.to_mime_type();
    let Some(subtype) = mime.strip_prefix("image/") else {
        return DEFAULT_EXTENSION;
    };

    extension_for_subtype(subtype).unwrap_or(DEFAULT_EXTENSION)
}
