//! Release asset collection

use release_fs::NormalizedPath;
use serde::Serialize;

use crate::selector::select_candidates;
use crate::{Error, Resolution, Result};

/// A file to upload with the release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseAsset {
    pub distribution: String,
    /// Absolute or base-directory-resolved path
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

/// Collect the artifacts of every distribution as release assets.
///
/// Inactive distributions contribute their artifacts too; activation only
/// governs packagers.
///
/// Paths are resolved against `basedir`, deduplicated and ordered by path
/// within each distribution. An empty result means there is nothing to
/// release, which is a precondition failure.
pub fn release_assets(basedir: &NormalizedPath, resolution: &Resolution) -> Result<Vec<ReleaseAsset>> {
    let mut assets = Vec::new();
    for distribution in &resolution.distributions {
        for artifact in select_candidates(&distribution.artifacts, |_| true) {
            let path = artifact.normalized_path().resolve_against(basedir);
            assets.push(ReleaseAsset {
                distribution: distribution.name.clone(),
                path: path.as_str().to_string(),
                platform: artifact.platform().map(str::to_string),
            });
        }
    }

    if assets.is_empty() {
        return Err(Error::precondition("release assets"));
    }
    tracing::debug!(count = assets.len(), "Collected release assets");
    Ok(assets)
}
