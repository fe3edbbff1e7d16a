//! Per-packager validation context

use std::collections::BTreeMap;

use release_fs::{NormalizedPath, PathProbe};
use release_model::{Artifact, Distribution, PackagerKind, Phase};

use super::target::ReleaseTarget;
use crate::errors::{ErrorCategory, Errors};
use crate::merge::is_blank;
use crate::props::Props;
use crate::template::render;

/// Everything a packager's field checks may look at, plus the error sink.
pub struct PackagerContext<'a> {
    pub distribution: &'a Distribution,
    pub kind: PackagerKind,
    pub category: ErrorCategory,
    pub phase: Phase,
    /// Project, release, distribution and packager properties
    pub props: Props,
    pub candidates: &'a [Artifact],
    pub basedir: &'a NormalizedPath,
    pub probe: &'a dyn PathProbe,
    pub target: &'a dyn ReleaseTarget,
    resolved: BTreeMap<String, String>,
    errors: &'a mut Errors,
}

impl<'a> PackagerContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        distribution: &'a Distribution,
        kind: PackagerKind,
        category: ErrorCategory,
        phase: Phase,
        props: Props,
        candidates: &'a [Artifact],
        basedir: &'a NormalizedPath,
        probe: &'a dyn PathProbe,
        target: &'a dyn ReleaseTarget,
        errors: &'a mut Errors,
    ) -> Self {
        Self {
            distribution,
            kind,
            category,
            phase,
            props,
            candidates,
            basedir,
            probe,
            target,
            resolved: BTreeMap::new(),
            errors,
        }
    }

    /// Prefix naming this packager in error messages, e.g. `distribution.app.snap`.
    pub fn prefix(&self) -> String {
        format!(
            "distribution.{}.{}",
            self.distribution.name,
            self.kind.field_name()
        )
    }

    /// Record `<prefix>.<field> <detail>`.
    pub fn invalid(&mut self, field: &str, detail: impl AsRef<str>) {
        let message = format!("{}.{} {}", self.prefix(), field, detail.as_ref());
        self.errors.add(self.category, message);
    }

    /// Record an error unless `value` is set. Returns whether it is set.
    pub fn require(&mut self, field: &str, value: &Option<String>) -> bool {
        if is_blank(value) {
            self.invalid(field, "must not be blank");
            return false;
        }
        true
    }

    /// Like [`Self::require`], also checking `value` against `allowed`.
    pub fn require_one_of(&mut self, field: &str, value: &Option<String>, allowed: &[&str]) {
        if !self.require(field, value) {
            return;
        }
        let value = value.as_deref().map(str::trim).unwrap_or_default();
        if !allowed.contains(&value) {
            self.invalid(
                field,
                format!("must be one of {} but was '{}'", allowed.join(", "), value),
            );
        }
    }

    /// Check that `path` (relative to the base directory) exists.
    ///
    /// A probe failure is recorded as an error as well.
    pub fn check_exists(&mut self, field: &str, path: &str) {
        let resolved = NormalizedPath::new(path.trim()).resolve_against(self.basedir);
        match self.probe.exists(&resolved) {
            Ok(true) => {}
            Ok(false) => self.invalid(field, format!("{} does not exist", resolved)),
            Err(e) => {
                tracing::warn!(path = %resolved, error = %e, "Path probe failed");
                self.invalid(field, format!("{} could not be checked: {}", resolved, e));
            }
        }
    }

    /// Resolve a template against this packager's properties.
    pub fn resolve(&self, template: &str) -> String {
        render(template, &self.props)
    }

    /// Expose a resolved value downstream under `key`.
    pub fn record(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.resolved.insert(key.into(), value.into());
    }

    pub(crate) fn into_resolved(self) -> BTreeMap<String, String> {
        self.resolved
    }
}
