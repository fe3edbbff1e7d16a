//! Artifacts captured for a distribution
//!
//! Platform tags are free-form (`linux-x86_64`, `osx-aarch_64`,
//! `windows-x86_64`), and vendors spell operating systems inconsistently, so
//! [`Os::from_platform`] folds the common spellings together.

use std::collections::BTreeMap;

use release_fs::NormalizedPath;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operating system family encoded in a platform tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    /// macOS, also spelled `osx`, `darwin` or `mac` in platform tags
    Osx,
    Windows,
}

impl Os {
    /// Detect the operating system from the leading component of a platform tag.
    pub fn from_platform(platform: &str) -> Option<Self> {
        let lower = platform.trim().to_lowercase();
        let head = lower.split(['-', '_']).next().unwrap_or_default();
        match head {
            "linux" => Some(Os::Linux),
            "osx" | "macos" | "darwin" | "mac" => Some(Os::Osx),
            "windows" | "win" | "win32" | "win64" => Some(Os::Windows),
            _ => None,
        }
    }
}

/// Kind of artifact, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactType {
    Archive,
    Jar,
    Package,
    Binary,
    Other,
}

impl ArtifactType {
    /// Classify an archive-aware extension such as `.tar.gz`.
    pub fn from_extension(extension: Option<&str>) -> Self {
        match extension {
            None | Some(".exe") => ArtifactType::Binary,
            Some(".zip" | ".tar" | ".tgz" | ".tar.gz" | ".tar.xz" | ".tar.bz2" | ".tar.zst") => {
                ArtifactType::Archive
            }
            Some(".jar") => ArtifactType::Jar,
            Some(".deb" | ".rpm" | ".dmg" | ".pkg" | ".msi" | ".snap") => ArtifactType::Package,
            Some(_) => ArtifactType::Other,
        }
    }
}

/// A file belonging to a distribution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Artifact {
    /// Path relative to the base directory, or absolute
    pub path: String,
    /// Platform tag, e.g. `linux-x86_64`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra_properties: BTreeMap<String, Value>,
}

impl Artifact {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn with_extra_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_properties.insert(key.into(), value.into());
        self
    }

    /// The cleaned path, used as identity and sort key.
    pub fn normalized_path(&self) -> NormalizedPath {
        NormalizedPath::new(&self.path)
    }

    pub fn file_name(&self) -> String {
        self.normalized_path()
            .file_name()
            .map(str::to_string)
            .unwrap_or_default()
    }

    pub fn archive_extension(&self) -> Option<String> {
        self.normalized_path().archive_extension()
    }

    pub fn artifact_type(&self) -> ArtifactType {
        ArtifactType::from_extension(self.archive_extension().as_deref())
    }

    /// A platform tag that is present and not blank.
    pub fn platform(&self) -> Option<&str> {
        self.platform.as_deref().map(str::trim).filter(|p| !p.is_empty())
    }

    pub fn os(&self) -> Option<Os> {
        self.platform().and_then(Os::from_platform)
    }

    /// Whether the extra property `key` is set to a truthy value.
    ///
    /// Accepts `true` and the strings `"true"`/`"yes"` (any case).
    pub fn flag(&self, key: &str) -> bool {
        match self.extra_properties.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => matches!(s.to_lowercase().as_str(), "true" | "yes"),
            _ => false,
        }
    }
}
