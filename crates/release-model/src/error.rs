//! Error types for release-model

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] release_fs::Error),

    #[error("Descriptor not found at {path}")]
    DescriptorNotFound { path: PathBuf },

    #[error("Invalid descriptor at {path}: {message}")]
    InvalidDescriptor { path: PathBuf, message: String },

    #[error("Invalid activation mode: {value}")]
    InvalidActive { value: String },

    #[error("Invalid packager type: {value}")]
    InvalidPackagerKind { value: String },

    #[error("Invalid archive format: {value}")]
    InvalidArchiveFormat { value: String },
}
