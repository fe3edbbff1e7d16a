//! [`TestWorkspace`] for on-disk scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary base directory holding a release descriptor.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path of the main descriptor, whether or not it was written.
    pub fn descriptor(&self) -> PathBuf {
        self.root().join("release.toml")
    }

    /// Write `release.toml`.
    pub fn write_descriptor(&self, content: &str) -> PathBuf {
        let path = self.descriptor();
        fs::write(&path, content).unwrap();
        path
    }

    /// Write `release.local.toml`.
    pub fn write_local_overlay(&self, content: &str) -> PathBuf {
        let path = self.root().join("release.local.toml");
        fs::write(&path, content).unwrap();
        path
    }

    /// Create a directory (and parents) relative to the root.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Write a file relative to the root, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
