//! Error types for release-core

use crate::errors::ValidationError;

/// Result type for release-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a resolution run
///
/// Configuration problems are not errors in this sense; they are collected in
/// [`crate::Errors`] and only surface here through
/// [`crate::Resolution::into_result`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required collaborator was not supplied
    #[error("Missing required input: {what}")]
    Precondition { what: String },

    /// The sweep finished with configuration errors
    #[error("Validation failed with {count} error(s)")]
    Validation {
        count: usize,
        errors: Vec<ValidationError>,
    },

    #[error(transparent)]
    Model(#[from] release_model::Error),

    #[error(transparent)]
    Fs(#[from] release_fs::Error),
}

impl Error {
    pub fn precondition(what: impl Into<String>) -> Self {
        Error::Precondition { what: what.into() }
    }
}
