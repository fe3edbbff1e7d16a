//! Archive packager: container formats and archive naming

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::PackagerCommon;
use crate::error::Error;

/// Archive container format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ArchiveFormat {
    Zip,
    Tar,
    TarGz,
    TarXz,
    TarBz2,
    TarZst,
}

impl ArchiveFormat {
    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ArchiveFormat::Zip => ".zip",
            ArchiveFormat::Tar => ".tar",
            ArchiveFormat::TarGz => ".tar.gz",
            ArchiveFormat::TarXz => ".tar.xz",
            ArchiveFormat::TarBz2 => ".tar.bz2",
            ArchiveFormat::TarZst => ".tar.zst",
        }
    }
}

impl FromStr for ArchiveFormat {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().trim_start_matches('.').to_lowercase().replace('_', ".").as_str() {
            "zip" => Ok(ArchiveFormat::Zip),
            "tar" => Ok(ArchiveFormat::Tar),
            "tar.gz" | "tgz" => Ok(ArchiveFormat::TarGz),
            "tar.xz" | "txz" => Ok(ArchiveFormat::TarXz),
            "tar.bz2" | "tbz2" => Ok(ArchiveFormat::TarBz2),
            "tar.zst" => Ok(ArchiveFormat::TarZst),
            _ => Err(Error::InvalidArchiveFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ArchiveFormat {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ArchiveFormat> for String {
    fn from(format: ArchiveFormat) -> Self {
        format.extension().trim_start_matches('.').to_string()
    }
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension().trim_start_matches('.'))
    }
}

/// Archive packager configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArchivePackager {
    #[serde(flatten)]
    pub common: PackagerCommon,

    /// Archive name template; defaults to `{{distributionName}}-{{projectVersion}}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_name: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formats: Vec<ArchiveFormat>,

    /// Append the artifact platform to the archive name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_platform: Option<bool>,
}

impl ArchivePackager {
    pub fn is_attach_platform(&self) -> bool {
        self.attach_platform.unwrap_or(false)
    }
}
