//! Distributions and their types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::packager::{ArchivePackager, BrewPackager, NativeImagePackager, SnapPackager};
use crate::{Active, Artifact, ExtraProperties};

/// What kind of binaries a distribution carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionType {
    /// Launcher scripts plus jars, runs anywhere a JVM does
    #[default]
    JavaBinary,
    /// An executable uber-jar
    SingleJar,
    Jlink,
    NativeImage,
    NativePackage,
    Binary,
}

impl DistributionType {
    /// Platform-specific distributions need every artifact tagged with a platform.
    pub fn is_platform_specific(&self) -> bool {
        matches!(
            self,
            DistributionType::Jlink
                | DistributionType::NativeImage
                | DistributionType::NativePackage
                | DistributionType::Binary
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionType::JavaBinary => "java-binary",
            DistributionType::SingleJar => "single-jar",
            DistributionType::Jlink => "jlink",
            DistributionType::NativeImage => "native-image",
            DistributionType::NativePackage => "native-package",
            DistributionType::Binary => "binary",
        }
    }
}

impl fmt::Display for DistributionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named set of artifacts plus its packager overrides.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Distribution {
    /// Taken from the `[distributions.<name>]` key by the loader
    #[serde(skip)]
    pub name: String,

    #[serde(rename = "type", default)]
    pub distribution_type: DistributionType,

    /// Unset means the distribution is always active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Active>,

    #[serde(skip)]
    pub enabled: bool,

    /// Name of the launcher; defaults to the distribution name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<String>,

    #[serde(default)]
    pub artifacts: Vec<Artifact>,

    #[serde(default, skip_serializing_if = "ExtraProperties::is_empty")]
    pub extra_properties: ExtraProperties,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snap: Option<SnapPackager>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brew: Option<BrewPackager>,

    #[serde(default, alias = "nativeImage", skip_serializing_if = "Option::is_none")]
    pub native_image: Option<NativeImagePackager>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive: Option<ArchivePackager>,
}

impl Distribution {
    pub fn new(name: impl Into<String>, distribution_type: DistributionType) -> Self {
        Self {
            name: name.into(),
            distribution_type,
            ..Self::default()
        }
    }

    pub fn with_artifact(mut self, artifact: Artifact) -> Self {
        self.artifacts.push(artifact);
        self
    }

    pub fn executable_name(&self) -> &str {
        self.executable
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(&self.name)
    }
}
