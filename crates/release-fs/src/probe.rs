//! Existence checks for paths referenced by release descriptors
//!
//! The validator never touches the filesystem directly. It asks a
//! [`PathProbe`], which lets tests substitute an in-memory view and lets the
//! validator fold probe failures into configuration errors.

use std::fs;

use crate::{Error, NormalizedPath, Result};

/// Answers whether a declared path exists.
pub trait PathProbe: Send + Sync {
    /// Returns `Ok(true)` if `path` exists.
    ///
    /// An `Err` means the question could not be answered (permission denied,
    /// broken mount); callers treat it as a configuration problem, not a crash.
    fn exists(&self, path: &NormalizedPath) -> Result<bool>;
}

/// Probe backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl PathProbe for LocalFs {
    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        let native = path.to_native();
        match fs::symlink_metadata(&native) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::io(native, e)),
        }
    }
}

impl<T: PathProbe + ?Sized> PathProbe for &T {
    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        (**self).exists(path)
    }
}

impl<T: PathProbe + ?Sized> PathProbe for Box<T> {
    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        (**self).exists(path)
    }
}
