//! Activation modes and project lifecycle phases

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Lifecycle phase of the project being released.
///
/// Derived from the project version by `release-core`; never written in a
/// descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// A final release, e.g. `1.2.0`
    Release,
    /// A pre-release, e.g. `1.2.0-rc.1`
    Prerelease,
    /// A development build, e.g. `1.2.0-SNAPSHOT`
    Snapshot,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Release => write!(f, "release"),
            Phase::Prerelease => write!(f, "prerelease"),
            Phase::Snapshot => write!(f, "snapshot"),
        }
    }
}

/// Activation mode of a distribution, packager, or packager sub-section.
///
/// A mode that was never written is represented as `Option::<Active>::None`
/// by the owning struct so that "not set" can be told apart from an explicit
/// choice when merging with shared defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Active {
    Always,
    Never,
    Release,
    Prerelease,
    ReleasePrerelease,
    Snapshot,
}

impl Active {
    /// Whether this mode enables its owner during `phase`.
    pub fn check(self, phase: Phase) -> bool {
        match self {
            Active::Always => true,
            Active::Never => false,
            Active::Release => phase == Phase::Release,
            Active::Prerelease => phase == Phase::Prerelease,
            Active::ReleasePrerelease => matches!(phase, Phase::Release | Phase::Prerelease),
            Active::Snapshot => phase == Phase::Snapshot,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Active::Always => "ALWAYS",
            Active::Never => "NEVER",
            Active::Release => "RELEASE",
            Active::Prerelease => "PRERELEASE",
            Active::ReleasePrerelease => "RELEASE_PRERELEASE",
            Active::Snapshot => "SNAPSHOT",
        }
    }
}

impl FromStr for Active {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "ALWAYS" => Ok(Active::Always),
            "NEVER" => Ok(Active::Never),
            "RELEASE" => Ok(Active::Release),
            "PRERELEASE" => Ok(Active::Prerelease),
            "RELEASE_PRERELEASE" => Ok(Active::ReleasePrerelease),
            "SNAPSHOT" => Ok(Active::Snapshot),
            _ => Err(Error::InvalidActive {
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Active {
    type Error = Error;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Active> for String {
    fn from(active: Active) -> Self {
        active.as_str().to_string()
    }
}

impl fmt::Display for Active {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
