//! Release target capabilities and properties

use release_model::{Release, ReleaseKind};
use serde::Serialize;

use crate::errors::Errors;
use crate::merge::is_blank;
use crate::props::Props;
use crate::template::render;

/// The hosting service a release is published to, as seen by the validator.
pub trait ReleaseTarget: Send + Sync {
    /// Whether releases can be created and assets uploaded.
    fn supports_release_operations(&self) -> bool;

    /// Whether release notes can be published.
    fn supports_release_notes(&self) -> bool;

    /// Download URL template for uploaded assets.
    fn download_url_format(&self) -> Option<&str> {
        None
    }

    /// Add the target's properties (`repoOwner`, `tagName`, ...) to `props`.
    fn contribute_props(&self, _props: &mut Props) {}
}

/// A release-target capability a packager depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Capability {
    ReleaseOperations,
    ReleaseNotes,
}

impl Capability {
    pub fn supported_by(self, target: &dyn ReleaseTarget) -> bool {
        match self {
            Capability::ReleaseOperations => target.supports_release_operations(),
            Capability::ReleaseNotes => target.supports_release_notes(),
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::ReleaseOperations => write!(f, "release operations"),
            Capability::ReleaseNotes => write!(f, "release notes"),
        }
    }
}

impl ReleaseTarget for Release {
    fn supports_release_operations(&self) -> bool {
        self.is_release_supported()
    }

    fn supports_release_notes(&self) -> bool {
        self.is_release_notes_supported()
    }

    fn download_url_format(&self) -> Option<&str> {
        Release::download_url_format(self)
    }

    fn contribute_props(&self, props: &mut Props) {
        let host = self.host();
        if let Some(host) = host {
            props.insert("repoHost", host.to_string());
        }
        if let Some(owner) = self.owner() {
            props.insert("repoOwner", owner.to_string());
        }
        if let Some(name) = self.name() {
            props.insert("repoName", name.to_string());
        }
        if let (Some(host), Some(owner), Some(name)) = (host, self.owner(), self.name()) {
            props.insert("repoUrl", format!("https://{host}/{owner}/{name}"));
        }

        let tag_name = render(self.tag_name(), props);
        props.insert("tagName", tag_name);

        if let Some(format) = self.latest_release_url_format() {
            let url = render(format, props);
            props.insert("latestReleaseUrl", url);
        }
        if let Some(format) = self.issue_tracker_url_format() {
            let url = render(format, props);
            props.insert("issueTrackerUrl", url);
        }
        if self.supports_release_notes() {
            if let Some(format) = self.release_notes_url_format() {
                let url = render(format, props);
                props.insert("releaseNotesUrl", url);
            }
        }
    }
}

/// Check the `[release]` section before any distribution is visited.
pub fn validate_release(release: &Release, errors: &mut Errors) {
    if release.kind == ReleaseKind::Generic {
        return;
    }
    if is_blank(&release.owner) {
        errors.configuration(format!("release.{}.owner must not be blank", release.kind));
    }
    if is_blank(&release.name) {
        errors.configuration(format!("release.{}.name must not be blank", release.kind));
    }
    if release.kind == ReleaseKind::Gitea && is_blank(&release.host) {
        errors.configuration("release.gitea.host must not be blank");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn github_props() {
        let release = Release::new(ReleaseKind::Github, "acme", "app");
        let mut props = Props::new();
        props.insert("projectVersion", "1.0.0");

        release.contribute_props(&mut props);

        assert_eq!(props.get_text("tagName").as_deref(), Some("v1.0.0"));
        assert_eq!(
            props.get_text("repoUrl").as_deref(),
            Some("https://github.com/acme/app")
        );
        assert_eq!(
            props.get_text("releaseNotesUrl").as_deref(),
            Some("https://github.com/acme/app/releases/tag/v1.0.0")
        );
        assert_eq!(
            props.get_text("latestReleaseUrl").as_deref(),
            Some("https://github.com/acme/app/releases/latest")
        );
    }

    #[test]
    fn release_notes_url_requires_notes_support() {
        let mut release = Release::new(ReleaseKind::Gitlab, "acme", "app");
        release.release_notes = Some(false);
        let mut props = Props::new();

        release.contribute_props(&mut props);

        assert!(!props.contains("releaseNotesUrl"));
        assert!(props.contains("issueTrackerUrl"));
    }

    #[test]
    fn validates_required_fields() {
        let mut errors = Errors::new();
        validate_release(&Release::default(), &mut errors);
        assert_eq!(errors.len(), 2);

        let mut errors = Errors::new();
        validate_release(&Release::new(ReleaseKind::Gitea, "acme", "app"), &mut errors);
        let messages: Vec<_> = errors.messages().collect();
        assert_eq!(messages, vec!["release.gitea.host must not be blank"]);

        let mut errors = Errors::new();
        validate_release(
            &Release {
                kind: ReleaseKind::Generic,
                ..Default::default()
            },
            &mut errors,
        );
        assert!(errors.is_empty());
    }
}
