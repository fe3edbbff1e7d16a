//! Activation policy evaluation
//!
//! An owner with an activation mode (distribution, packager, upx section) is
//! enabled when its mode accepts the current project [`Phase`].

use std::sync::LazyLock;

use regex::Regex;
use release_model::packager::{PackagerCommon, Upx};
use release_model::project::DEFAULT_SNAPSHOT_PATTERN;
use release_model::{Active, Distribution, Phase};

static DEFAULT_SNAPSHOT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&anchored(DEFAULT_SNAPSHOT_PATTERN)).expect("default snapshot pattern is valid")
});

/// Something that carries an activation mode and a resolved-enabled flag.
pub trait Activatable {
    /// Mode used when none was written on either side.
    const UNSET: Active = Active::Never;

    fn active(&self) -> Option<Active>;

    fn set_active(&mut self, active: Active);

    fn is_enabled(&self) -> bool;

    fn set_enabled(&mut self, enabled: bool);

    /// Adopt `shared`'s mode when this owner has none.
    fn inherit_active(&mut self, shared: &Self) {
        if self.active().is_none() {
            if let Some(active) = shared.active() {
                self.set_active(active);
            }
        }
    }

    /// Evaluate the mode for `phase` and store the result.
    fn resolve_enabled(&mut self, phase: Phase) -> bool {
        let enabled = resolve(self.active().or(Some(Self::UNSET)), phase);
        self.set_enabled(enabled);
        enabled
    }
}

/// Decide whether `mode` enables its owner during `phase`. Unset is `NEVER`.
pub fn resolve(mode: Option<Active>, phase: Phase) -> bool {
    mode.unwrap_or(Active::Never).check(phase)
}

impl Activatable for PackagerCommon {
    fn active(&self) -> Option<Active> {
        self.active
    }

    fn set_active(&mut self, active: Active) {
        self.active = Some(active);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Activatable for Upx {
    fn active(&self) -> Option<Active> {
        self.active
    }

    fn set_active(&mut self, active: Active) {
        self.active = Some(active);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

impl Activatable for Distribution {
    const UNSET: Active = Active::Always;

    fn active(&self) -> Option<Active> {
        self.active
    }

    fn set_active(&mut self, active: Active) {
        self.active = Some(active);
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Compile a user snapshot pattern so that it must match the whole version.
pub fn snapshot_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&anchored(pattern))
}

/// Derive the project phase from its version.
///
/// Snapshot wins over pre-release: `1.0.0-rc.1-SNAPSHOT` is a snapshot.
/// `pattern` defaults to `.*-SNAPSHOT`.
pub fn detect_phase(version: &str, pattern: Option<&Regex>) -> Phase {
    let version = version.trim();
    let snapshot = pattern.unwrap_or(&DEFAULT_SNAPSHOT);
    if snapshot.is_match(version) {
        return Phase::Snapshot;
    }
    match semver::Version::parse(version) {
        Ok(v) if !v.pre.is_empty() => Phase::Prerelease,
        _ => Phase::Release,
    }
}

fn anchored(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}
