//! Project metadata

use serde::{Deserialize, Serialize};

use crate::ExtraProperties;

/// Version pattern marking snapshot builds when none is configured.
pub const DEFAULT_SNAPSHOT_PATTERN: &str = ".*-SNAPSHOT";

/// How snapshot versions are recognised.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Regular expression matched against the whole version string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl SnapshotConfig {
    pub fn pattern(&self) -> &str {
        self.pattern
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or(DEFAULT_SNAPSHOT_PATTERN)
    }
}

/// The project being released (`[project]`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub snapshot: SnapshotConfig,

    /// Fixed build timestamp; the resolver uses the current time when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "ExtraProperties::is_empty")]
    pub extra_properties: ExtraProperties,
}

impl Project {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }
}
