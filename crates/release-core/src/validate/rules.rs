//! Packager rule set and the checks shared by every packager type

use release_model::packager::{Packager, PackagerCommon};
use release_model::Artifact;

use super::context::PackagerContext;
use super::outcome::EffectivePackager;
use super::target::Capability;
use crate::errors::ErrorCategory;
use crate::merge::{Merge, is_blank};
use crate::props::Props;
use crate::selector::Cardinality;
use crate::template::render;

pub const DEFAULT_COMMIT_AUTHOR_NAME: &str = "releasebot";
pub const DEFAULT_COMMIT_AUTHOR_EMAIL: &str = "releasebot@users.noreply.github.com";

/// Type-specific behaviour plugged into the orchestrator.
pub trait PackagerRules: Packager + Merge + Into<EffectivePackager> {
    /// Category of every error this packager records.
    const CATEGORY: ErrorCategory = ErrorCategory::Configuration;

    /// Release-target capability without which the packager is disabled.
    const CAPABILITY: Option<Capability> = None;

    /// Expected number of candidate artifacts, read after the merge.
    fn cardinality(&self) -> Cardinality {
        Cardinality::ExactlyOne
    }

    /// Whether `artifact` is a candidate for this packager.
    fn accepts(&self, artifact: &Artifact) -> bool;

    /// Type-specific defaults and required-field checks.
    fn validate(&mut self, ctx: &mut PackagerContext<'_>);
}

/// Defaults and checks for the fields every packager has.
pub(crate) fn validate_common(common: &mut PackagerCommon, ctx: &mut PackagerContext<'_>) {
    let author = &mut common.commit_author;
    if is_blank(&author.name) {
        author.name = Some(DEFAULT_COMMIT_AUTHOR_NAME.to_string());
    }
    if is_blank(&author.email) {
        author.email = Some(DEFAULT_COMMIT_AUTHOR_EMAIL.to_string());
    }

    common.continue_on_error.get_or_insert(false);

    let template_directory = common
        .template_directory
        .as_deref()
        .map(str::trim)
        .filter(|dir| !dir.is_empty())
        .map(str::to_string);
    match template_directory {
        Some(dir) => ctx.check_exists("template_directory", &dir),
        None => {
            common.template_directory = Some(format!(
                "src/distributions/{}/{}",
                ctx.distribution.name,
                ctx.kind.as_str()
            ));
        }
    }

    if is_blank(&common.download_url) && ctx.target.supports_release_operations() {
        common.download_url = ctx.target.download_url_format().map(str::to_string);
    }
    if let Some(url) = common.download_url.as_deref().filter(|u| !u.trim().is_empty()) {
        for artifact in ctx.candidates {
            let mut props: Props = ctx.props.clone();
            let file_name = artifact.file_name();
            props.insert("artifactFileName", file_name.clone());
            if let Some(platform) = artifact.platform() {
                props.insert("artifactPlatform", platform.to_string());
            }
            let resolved = render(url, &props);
            ctx.record(format!("downloadUrl:{file_name}"), resolved);
        }
    }

    if Capability::ReleaseNotes.supported_by(ctx.target) {
        if let Some(url) = ctx.props.get_text("releaseNotesUrl") {
            ctx.record("releaseNotesUrl", url);
        }
    }
}

/// Platform-specific distributions need a platform on every candidate.
pub(crate) fn validate_platforms(ctx: &mut PackagerContext<'_>) {
    if !ctx.distribution.distribution_type.is_platform_specific() {
        return;
    }
    let missing: Vec<String> = ctx
        .candidates
        .iter()
        .filter(|a| a.platform().is_none())
        .map(|a| a.path.clone())
        .collect();
    for path in missing {
        ctx.invalid(
            "artifacts",
            format!(
                "{} must declare a platform for a {} distribution",
                path, ctx.distribution.distribution_type
            ),
        );
    }
}
