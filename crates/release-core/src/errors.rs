//! Accumulator for configuration errors
//!
//! Validation never stops at the first problem. Every check appends to an
//! [`Errors`] value and the caller inspects it once the whole sweep is done.

use std::fmt;

use serde::Serialize;

/// Which part of the pipeline an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Release packaging configuration
    Configuration,
    /// Binary assembly configuration (native images)
    Assembly,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Configuration => write!(f, "configuration"),
            ErrorCategory::Assembly => write!(f, "assembly"),
        }
    }
}

/// A single recorded problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub category: ErrorCategory,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Ordered, append-only collection of configuration errors.
///
/// Duplicates are kept: the same mistake in two distributions is two errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Errors {
    entries: Vec<ValidationError>,
}

impl Errors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, category: ErrorCategory, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%category, %message, "Recorded validation error");
        self.entries.push(ValidationError { category, message });
    }

    pub fn configuration(&mut self, message: impl Into<String>) {
        self.add(ErrorCategory::Configuration, message);
    }

    pub fn assembly(&mut self, message: impl Into<String>) {
        self.add(ErrorCategory::Assembly, message);
    }

    /// Append everything recorded in `other`, keeping its order.
    pub fn extend(&mut self, other: Errors) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn count(&self, category: ErrorCategory) -> usize {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.entries.iter()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.message.as_str())
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
