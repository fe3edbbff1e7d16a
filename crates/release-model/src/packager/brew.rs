//! Homebrew formula packager

use serde::{Deserialize, Serialize};

use super::PackagerCommon;

/// Homebrew formula packager configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BrewPackager {
    #[serde(flatten)]
    pub common: PackagerCommon,

    /// Formula name template; defaults to `{{distributionName}}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula_name: Option<String>,

    /// Publish one formula covering several platform artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multi_platform: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<BrewDependency>,

    /// Lines of the formula's `livecheck` block
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub livecheck: Vec<String>,
}

impl BrewPackager {
    pub fn is_multi_platform(&self) -> bool {
        self.multi_platform.unwrap_or(false)
    }
}

/// A formula dependency; identity is the name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrewDependency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BrewDependency {
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            version: version.map(str::to_string),
        }
    }
}
