//! Path probes for tests.

use std::collections::BTreeSet;
use std::io;

use release_fs::{Error, NormalizedPath, PathProbe, Result};

/// Probe answering from a fixed set of paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryProbe {
    paths: BTreeSet<NormalizedPath>,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `path` as existing.
    pub fn with_path(mut self, path: impl AsRef<str>) -> Self {
        self.paths.insert(NormalizedPath::new(path.as_ref()));
        self
    }
}

impl PathProbe for MemoryProbe {
    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        Ok(self.paths.contains(path))
    }
}

/// Probe whose every call fails, as an unreadable mount would.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingProbe;

impl PathProbe for FailingProbe {
    fn exists(&self, path: &NormalizedPath) -> Result<bool> {
        Err(Error::io(
            path.to_native(),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        ))
    }
}
