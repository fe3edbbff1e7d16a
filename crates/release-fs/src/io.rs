//! Bounded text reads for release descriptors

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Largest descriptor the loader accepts.
pub const MAX_DESCRIPTOR_BYTES: u64 = 1024 * 1024;

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read text content, refusing files larger than `max` bytes.
pub fn read_text_bounded(path: &NormalizedPath, max: u64) -> Result<String> {
    let native_path = path.to_native();
    let size = fs::metadata(&native_path)
        .map_err(|e| Error::io(&native_path, e))?
        .len();
    if size > max {
        tracing::warn!(path = %path, size, max, "Refusing oversized file");
        return Err(Error::TooLarge {
            path: native_path,
            size,
            max,
        });
    }
    tracing::debug!(path = %path, size, "Reading file");
    read_text(path)
}
