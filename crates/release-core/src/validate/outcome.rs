//! Results of a resolution run

use std::collections::BTreeMap;
use std::fmt;

use release_model::packager::PackagerCommon;
use release_model::{
    ArchivePackager, Artifact, BrewPackager, DistributionType, NativeImagePackager, PackagerKind,
    Phase, SnapPackager,
};
use serde::Serialize;

use super::target::Capability;
use crate::errors::Errors;
use crate::{Error, Result};

/// Progress of one (distribution, packager) pair. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    Pending,
    ActivationChecked,
    Merged,
    CandidatesSelected,
    FieldValidated,
}

/// Why a packager ended up disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisabledReason {
    /// The packager's own activation mode is off for this phase
    Inactive,
    /// The owning distribution is off for this phase
    DistributionInactive,
    /// The release target lacks a capability the packager needs
    Unsupported { capability: Capability },
    NoCandidates,
    /// More candidate artifacts than the packager accepts
    Ambiguous { count: usize },
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisabledReason::Inactive => write!(f, "inactive"),
            DisabledReason::DistributionInactive => write!(f, "distribution inactive"),
            DisabledReason::Unsupported { capability } => {
                write!(f, "release target does not support {capability}")
            }
            DisabledReason::NoCandidates => write!(f, "no candidate artifacts"),
            DisabledReason::Ambiguous { count } => write!(f, "{count} candidate artifacts"),
        }
    }
}

/// Terminal state of a (distribution, packager) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "state")]
pub enum PackagerState {
    Enabled,
    Disabled { reason: DisabledReason },
}

impl PackagerState {
    pub fn disabled(reason: DisabledReason) -> Self {
        PackagerState::Disabled { reason }
    }
}

/// Effective configuration of an enabled packager.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EffectivePackager {
    Snap(SnapPackager),
    Brew(BrewPackager),
    NativeImage(NativeImagePackager),
    Archive(ArchivePackager),
}

impl EffectivePackager {
    pub fn common(&self) -> &PackagerCommon {
        match self {
            EffectivePackager::Snap(p) => &p.common,
            EffectivePackager::Brew(p) => &p.common,
            EffectivePackager::NativeImage(p) => &p.common,
            EffectivePackager::Archive(p) => &p.common,
        }
    }

    pub fn as_snap(&self) -> Option<&SnapPackager> {
        match self {
            EffectivePackager::Snap(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_brew(&self) -> Option<&BrewPackager> {
        match self {
            EffectivePackager::Brew(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_native_image(&self) -> Option<&NativeImagePackager> {
        match self {
            EffectivePackager::NativeImage(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_archive(&self) -> Option<&ArchivePackager> {
        match self {
            EffectivePackager::Archive(p) => Some(p),
            _ => None,
        }
    }
}

impl From<SnapPackager> for EffectivePackager {
    fn from(p: SnapPackager) -> Self {
        EffectivePackager::Snap(p)
    }
}

impl From<BrewPackager> for EffectivePackager {
    fn from(p: BrewPackager) -> Self {
        EffectivePackager::Brew(p)
    }
}

impl From<NativeImagePackager> for EffectivePackager {
    fn from(p: NativeImagePackager) -> Self {
        EffectivePackager::NativeImage(p)
    }
}

impl From<ArchivePackager> for EffectivePackager {
    fn from(p: ArchivePackager) -> Self {
        EffectivePackager::Archive(p)
    }
}

/// What happened to one packager of one distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackagerOutcome {
    pub kind: PackagerKind,
    pub state: PackagerState,
    /// Last stage reached before the terminal state
    pub stage: Stage,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Artifact>,
    /// Resolved names and URLs (`packageName`, `downloadUrl:<file>`, ...)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub resolved: BTreeMap<String, String>,
    /// Present only when enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective: Option<EffectivePackager>,
}

impl PackagerOutcome {
    pub(crate) fn disabled(kind: PackagerKind, stage: Stage, reason: DisabledReason) -> Self {
        Self {
            kind,
            state: PackagerState::disabled(reason),
            stage,
            candidates: Vec::new(),
            resolved: BTreeMap::new(),
            effective: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.state == PackagerState::Enabled
    }

    pub fn disabled_reason(&self) -> Option<DisabledReason> {
        match self.state {
            PackagerState::Enabled => None,
            PackagerState::Disabled { reason } => Some(reason),
        }
    }
}

/// One distribution after resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDistribution {
    pub name: String,
    #[serde(rename = "type")]
    pub distribution_type: DistributionType,
    pub enabled: bool,
    pub artifacts: Vec<Artifact>,
    pub packagers: Vec<PackagerOutcome>,
}

impl ResolvedDistribution {
    pub fn packager(&self, kind: PackagerKind) -> Option<&PackagerOutcome> {
        self.packagers.iter().find(|p| p.kind == kind)
    }

    pub fn enabled_packagers(&self) -> impl Iterator<Item = &PackagerOutcome> {
        self.packagers.iter().filter(|p| p.is_enabled())
    }
}

/// Result of a full sweep over every distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub phase: Phase,
    pub distributions: Vec<ResolvedDistribution>,
    pub errors: Errors,
}

impl Resolution {
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn distribution(&self, name: &str) -> Option<&ResolvedDistribution> {
        self.distributions.iter().find(|d| d.name == name)
    }

    pub fn outcome(&self, distribution: &str, kind: PackagerKind) -> Option<&PackagerOutcome> {
        self.distribution(distribution)
            .and_then(|d| d.packager(kind))
    }

    /// Turn a sweep with errors into [`Error::Validation`].
    pub fn into_result(self) -> Result<Self> {
        if self.errors.is_empty() {
            return Ok(self);
        }
        let errors = self.errors.into_vec();
        Err(Error::Validation {
            count: errors.len(),
            errors,
        })
    }
}
