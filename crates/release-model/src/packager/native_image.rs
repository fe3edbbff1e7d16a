//! GraalVM native-image packager and its UPX sub-section

use serde::{Deserialize, Serialize};

use super::{ArchiveFormat, PackagerCommon};
use crate::{Active, Artifact};

/// GraalVM native-image packager configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NativeImagePackager {
    #[serde(flatten)]
    pub common: PackagerCommon,

    /// Image name template; defaults to `{{distributionName}}-{{projectVersion}}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,

    /// Optional template applied to the resolved image name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name_transform: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_format: Option<ArchiveFormat>,

    /// GraalVM installation used when no per-platform JDKs are given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graal: Option<Artifact>,

    /// Per-platform GraalVM JDKs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub graal_jdks: Vec<Artifact>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,

    #[serde(default)]
    pub upx: Upx,
}

/// UPX compression of the produced image.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Upx {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Active>,
    #[serde(skip)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}
