//! Release target (the git hosting service a release is published to)

use std::fmt;

use serde::{Deserialize, Serialize};

const DEFAULT_TAG_NAME: &str = "v{{projectVersion}}";
const DEFAULT_REF: &str = "main";

/// Hosting service flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseKind {
    #[default]
    Github,
    Gitlab,
    Gitea,
    Codeberg,
    /// Plain git remote with no release API
    Generic,
}

impl ReleaseKind {
    fn default_host(&self) -> Option<&'static str> {
        match self {
            ReleaseKind::Github => Some("github.com"),
            ReleaseKind::Gitlab => Some("gitlab.com"),
            ReleaseKind::Codeberg => Some("codeberg.org"),
            ReleaseKind::Gitea | ReleaseKind::Generic => None,
        }
    }

    fn default_download_url_format(&self) -> Option<&'static str> {
        match self {
            ReleaseKind::Github | ReleaseKind::Gitea | ReleaseKind::Codeberg => Some(
                "https://{{repoHost}}/{{repoOwner}}/{{repoName}}/releases/download/{{tagName}}/{{artifactFileName}}",
            ),
            ReleaseKind::Gitlab => Some(
                "https://{{repoHost}}/{{repoOwner}}/{{repoName}}/-/releases/{{tagName}}/downloads/{{artifactFileName}}",
            ),
            ReleaseKind::Generic => None,
        }
    }

    fn default_release_notes_url_format(&self) -> Option<&'static str> {
        match self {
            ReleaseKind::Github | ReleaseKind::Gitea | ReleaseKind::Codeberg => {
                Some("https://{{repoHost}}/{{repoOwner}}/{{repoName}}/releases/tag/{{tagName}}")
            }
            ReleaseKind::Gitlab => {
                Some("https://{{repoHost}}/{{repoOwner}}/{{repoName}}/-/releases/{{tagName}}")
            }
            ReleaseKind::Generic => None,
        }
    }

    fn default_latest_release_url_format(&self) -> Option<&'static str> {
        match self {
            ReleaseKind::Github | ReleaseKind::Gitea | ReleaseKind::Codeberg => {
                Some("https://{{repoHost}}/{{repoOwner}}/{{repoName}}/releases/latest")
            }
            ReleaseKind::Gitlab => {
                Some("https://{{repoHost}}/{{repoOwner}}/{{repoName}}/-/releases/permalink/latest")
            }
            ReleaseKind::Generic => None,
        }
    }

    fn default_issue_tracker_url_format(&self) -> Option<&'static str> {
        match self {
            ReleaseKind::Github | ReleaseKind::Gitea | ReleaseKind::Codeberg => {
                Some("https://{{repoHost}}/{{repoOwner}}/{{repoName}}/issues")
            }
            ReleaseKind::Gitlab => Some("https://{{repoHost}}/{{repoOwner}}/{{repoName}}/-/issues"),
            ReleaseKind::Generic => None,
        }
    }
}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseKind::Github => "github",
            ReleaseKind::Gitlab => "gitlab",
            ReleaseKind::Gitea => "gitea",
            ReleaseKind::Codeberg => "codeberg",
            ReleaseKind::Generic => "generic",
        };
        f.write_str(name)
    }
}

/// Release target configuration (`[release]`).
///
/// URL formats are templates; unset formats fall back to the defaults of
/// the selected [`ReleaseKind`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Release {
    #[serde(default)]
    pub kind: ReleaseKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_name: Option<String>,
    /// Branch releases are cut from (gitlab)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes_url_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_release_url_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_tracker_url_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_release: Option<bool>,
    /// Publish release notes alongside the release (default true)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_notes: Option<bool>,
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl Release {
    pub fn new(kind: ReleaseKind, owner: &str, name: &str) -> Self {
        Self {
            kind,
            owner: Some(owner.to_string()),
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn host(&self) -> Option<&str> {
        non_blank(&self.host).or_else(|| self.kind.default_host())
    }

    pub fn owner(&self) -> Option<&str> {
        non_blank(&self.owner)
    }

    pub fn name(&self) -> Option<&str> {
        non_blank(&self.name)
    }

    pub fn tag_name(&self) -> &str {
        non_blank(&self.tag_name).unwrap_or(DEFAULT_TAG_NAME)
    }

    pub fn ref_name(&self) -> &str {
        non_blank(&self.ref_name).unwrap_or(DEFAULT_REF)
    }

    pub fn download_url_format(&self) -> Option<&str> {
        non_blank(&self.download_url_format).or_else(|| self.kind.default_download_url_format())
    }

    pub fn release_notes_url_format(&self) -> Option<&str> {
        non_blank(&self.release_notes_url_format)
            .or_else(|| self.kind.default_release_notes_url_format())
    }

    pub fn latest_release_url_format(&self) -> Option<&str> {
        non_blank(&self.latest_release_url_format)
            .or_else(|| self.kind.default_latest_release_url_format())
    }

    pub fn issue_tracker_url_format(&self) -> Option<&str> {
        non_blank(&self.issue_tracker_url_format)
            .or_else(|| self.kind.default_issue_tracker_url_format())
    }

    /// Whether the target can create releases and host assets.
    pub fn is_release_supported(&self) -> bool {
        self.kind != ReleaseKind::Generic && !self.skip_release.unwrap_or(false)
    }

    /// Whether the target publishes release notes.
    pub fn is_release_notes_supported(&self) -> bool {
        self.is_release_supported() && self.release_notes.unwrap_or(true)
    }
}
