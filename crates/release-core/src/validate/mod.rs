//! Validation orchestrator
//!
//! Every (distribution, packager) pair walks the same forward-only sequence:
//!
//! ```text
//! Pending -> ActivationChecked -> Merged -> CandidatesSelected -> FieldValidated
//!    |              |               |               |                  |
//!    +--------------+---------------+---------------+-> Disabled       +-> Enabled
//! ```
//!
//! An inactive packager stops after the activation check. A packager whose
//! release capability is missing stops after the merge. Zero candidates stop
//! it silently; too many record one error and stop it. Missing required
//! fields are recorded but do not disable anything.

mod archive;
mod brew;
mod context;
mod native_image;
mod outcome;
mod rules;
mod snap;
mod target;

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use release_fs::{LocalFs, NormalizedPath, PathProbe};
use release_model::{
    ArchivePackager, BrewPackager, Distribution, Model, NativeImagePackager, PackagerKind, Phase,
    SnapPackager,
};

use crate::activation::{Activatable, detect_phase, snapshot_pattern};
use crate::errors::Errors;
use crate::props::{Props, distribution_props, project_props};
use crate::selector::{Selection, select_candidates};
use crate::{Error, Result};

pub use brew::class_name;
pub use context::PackagerContext;
pub use outcome::{
    DisabledReason, EffectivePackager, PackagerOutcome, PackagerState, Resolution,
    ResolvedDistribution, Stage,
};
pub use rules::{DEFAULT_COMMIT_AUTHOR_EMAIL, DEFAULT_COMMIT_AUTHOR_NAME, PackagerRules};
pub use target::{Capability, ReleaseTarget, validate_release};

/// Builder and entry point for a resolution run.
///
/// ```no_run
/// use release_core::Resolver;
/// use release_fs::NormalizedPath;
/// use release_model::load_model;
///
/// let model = load_model(&NormalizedPath::new("release.toml"))?;
/// let resolution = Resolver::new()
///     .basedir(NormalizedPath::new("."))
///     .model(&model)
///     .resolve()?;
/// for error in &resolution.errors {
///     eprintln!("{error}");
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Default)]
pub struct Resolver<'a> {
    basedir: Option<NormalizedPath>,
    model: Option<&'a Model>,
    probe: Option<&'a dyn PathProbe>,
    target: Option<&'a dyn ReleaseTarget>,
    timestamp: Option<String>,
    parallel: bool,
}

impl<'a> Resolver<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory relative paths in the model are resolved against. Required.
    pub fn basedir(mut self, basedir: NormalizedPath) -> Self {
        self.basedir = Some(basedir);
        self
    }

    /// The model to resolve. Required.
    pub fn model(mut self, model: &'a Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Filesystem probe; defaults to the local filesystem.
    pub fn probe(mut self, probe: &'a dyn PathProbe) -> Self {
        self.probe = Some(probe);
        self
    }

    /// Release target; defaults to the model's `[release]` section.
    pub fn target(mut self, target: &'a dyn ReleaseTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Fixed `timestamp` property, overriding the project's.
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Resolve distributions on one scoped thread each.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run the sweep.
    ///
    /// Fails only on a missing base directory or model; configuration
    /// problems end up in [`Resolution::errors`].
    pub fn resolve(&self) -> Result<Resolution> {
        let basedir = self
            .basedir
            .as_ref()
            .ok_or_else(|| Error::precondition("base directory"))?;
        let model = self
            .model
            .ok_or_else(|| Error::precondition("release model"))?;
        let probe: &dyn PathProbe = self.probe.unwrap_or(&LocalFs);
        let target: &dyn ReleaseTarget = self.target.unwrap_or(&model.release);

        let mut errors = Errors::new();
        validate_project(model, &mut errors);
        validate_release(&model.release, &mut errors);

        let phase = project_phase(model, &mut errors);
        let timestamp = self
            .timestamp
            .clone()
            .or_else(|| model.project.timestamp.clone())
            .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));

        let mut props = project_props(&model.project, phase == Phase::Snapshot, &timestamp);
        target.contribute_props(&mut props);

        tracing::debug!(%phase, parallel = self.parallel, "Resolving release model");

        let sweep = Sweep {
            model,
            basedir,
            probe,
            target,
            phase,
            props,
        };
        let sweep = &sweep;

        let results: Vec<(ResolvedDistribution, Errors)> = if self.parallel {
            std::thread::scope(|scope| {
                let handles: Vec<_> = model
                    .distributions
                    .values()
                    .map(|distribution| scope.spawn(move || sweep.distribution(distribution)))
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                    })
                    .collect()
            })
        } else {
            model
                .distributions
                .values()
                .map(|distribution| sweep.distribution(distribution))
                .collect()
        };

        let mut distributions = Vec::with_capacity(results.len());
        for (resolved, distribution_errors) in results {
            errors.extend(distribution_errors);
            distributions.push(resolved);
        }

        tracing::info!(
            distributions = distributions.len(),
            errors = errors.len(),
            "Resolution finished"
        );

        Ok(Resolution {
            phase,
            distributions,
            errors,
        })
    }
}

fn validate_project(model: &Model, errors: &mut Errors) {
    if model.project.name.trim().is_empty() {
        errors.configuration("project.name must not be blank");
    }
    if model.project.version.trim().is_empty() {
        errors.configuration("project.version must not be blank");
    }
}

fn project_phase(model: &Model, errors: &mut Errors) -> Phase {
    let pattern = model
        .project
        .snapshot
        .pattern
        .as_deref()
        .filter(|p| !p.trim().is_empty());
    let compiled = match pattern.map(snapshot_pattern) {
        Some(Ok(regex)) => Some(regex),
        Some(Err(e)) => {
            errors.configuration(format!(
                "project.snapshot.pattern is not a valid regular expression: {e}"
            ));
            None
        }
        None => None,
    };
    detect_phase(&model.project.version, compiled.as_ref())
}

/// Shared, read-only state of one run.
struct Sweep<'a> {
    model: &'a Model,
    basedir: &'a NormalizedPath,
    probe: &'a dyn PathProbe,
    target: &'a dyn ReleaseTarget,
    phase: Phase,
    props: Props,
}

/// Forward-only stage tracker for one pair.
struct Progress<'a> {
    distribution: &'a str,
    kind: PackagerKind,
    stage: Stage,
}

impl Progress<'_> {
    fn advance(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "stages only move forward");
        tracing::debug!(
            distribution = self.distribution,
            packager = %self.kind,
            stage = ?next,
            "Packager stage"
        );
        self.stage = next;
    }

    fn disable(&self, reason: DisabledReason) -> PackagerOutcome {
        tracing::debug!(
            distribution = self.distribution,
            packager = %self.kind,
            %reason,
            "Packager disabled"
        );
        PackagerOutcome::disabled(self.kind, self.stage, reason)
    }
}

impl Sweep<'_> {
    fn distribution(&self, distribution: &Distribution) -> (ResolvedDistribution, Errors) {
        let mut errors = Errors::new();
        let mut local = distribution.clone();

        let packagers = if local.resolve_enabled(self.phase) {
            let props = distribution_props(&self.props, &local);
            PackagerKind::ALL
                .iter()
                .map(|kind| match kind {
                    PackagerKind::Snap => self.packager::<SnapPackager>(&local, &props, &mut errors),
                    PackagerKind::Brew => self.packager::<BrewPackager>(&local, &props, &mut errors),
                    PackagerKind::NativeImage => {
                        self.packager::<NativeImagePackager>(&local, &props, &mut errors)
                    }
                    PackagerKind::Archive => {
                        self.packager::<ArchivePackager>(&local, &props, &mut errors)
                    }
                })
                .collect()
        } else {
            tracing::debug!(distribution = %local.name, "Distribution inactive");
            PackagerKind::ALL
                .iter()
                .map(|kind| {
                    PackagerOutcome::disabled(
                        *kind,
                        Stage::Pending,
                        DisabledReason::DistributionInactive,
                    )
                })
                .collect()
        };

        let resolved = ResolvedDistribution {
            name: local.name,
            distribution_type: local.distribution_type,
            enabled: local.enabled,
            artifacts: local.artifacts,
            packagers,
        };
        (resolved, errors)
    }

    fn packager<P: PackagerRules>(
        &self,
        distribution: &Distribution,
        distribution_props: &Props,
        errors: &mut Errors,
    ) -> PackagerOutcome {
        let kind = P::KIND;
        let shared = P::shared(&self.model.packagers);
        let mut packager = P::local(distribution).cloned().unwrap_or_default();
        let mut progress = Progress {
            distribution: &distribution.name,
            kind,
            stage: Stage::Pending,
        };

        packager.common_mut().inherit_active(shared.common());
        let enabled = packager.common_mut().resolve_enabled(self.phase);
        progress.advance(Stage::ActivationChecked);
        if !enabled {
            return progress.disable(DisabledReason::Inactive);
        }

        packager.merge_from(shared);
        progress.advance(Stage::Merged);

        if let Some(capability) = P::CAPABILITY {
            if !capability.supported_by(self.target) {
                return progress.disable(DisabledReason::Unsupported { capability });
            }
        }

        let skip_flag = kind.skip_flag();
        let candidates = select_candidates(&distribution.artifacts, |artifact| {
            !artifact.flag(skip_flag) && packager.accepts(artifact)
        });
        progress.advance(Stage::CandidatesSelected);

        let candidates = match packager.cardinality().check(candidates) {
            Selection::Selected(candidates) => candidates,
            Selection::Empty => return progress.disable(DisabledReason::NoCandidates),
            Selection::Ambiguous(candidates) => {
                let paths: Vec<&str> = candidates.iter().map(|a| a.path.as_str()).collect();
                errors.add(
                    P::CATEGORY,
                    format!(
                        "distribution.{}.{} expects exactly one candidate artifact but found {}: {}",
                        distribution.name,
                        kind.field_name(),
                        candidates.len(),
                        paths.join(", ")
                    ),
                );
                return progress.disable(DisabledReason::Ambiguous {
                    count: candidates.len(),
                });
            }
        };

        let props = distribution_props.with_overlay(&packager.common().extra_properties);
        let mut ctx = PackagerContext::new(
            distribution,
            kind,
            P::CATEGORY,
            self.phase,
            props,
            &candidates,
            self.basedir,
            self.probe,
            self.target,
            errors,
        );
        rules::validate_common(packager.common_mut(), &mut ctx);
        packager.validate(&mut ctx);
        rules::validate_platforms(&mut ctx);
        let resolved: BTreeMap<String, String> = ctx.into_resolved();
        progress.advance(Stage::FieldValidated);

        PackagerOutcome {
            kind,
            state: PackagerState::Enabled,
            stage: progress.stage,
            candidates,
            resolved,
            effective: Some(packager.into()),
        }
    }
}
