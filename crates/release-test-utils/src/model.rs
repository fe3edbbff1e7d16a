//! [`ModelBuilder`] for resolver test scenarios.

use release_model::{
    Active, ArchiveFormat, ArchivePackager, Artifact, Distribution, DistributionType, Model,
    Packagers, Project, Release, ReleaseKind, SnapPackager,
};

/// Fluent builder for a [`Model`].
///
/// Starts from a valid project (`app` at the given version) released to
/// `github.com/acme/app`, with every packager left at its defaults.
///
/// ```rust
/// use release_model::{Artifact, Distribution, DistributionType};
/// use release_test_utils::ModelBuilder;
///
/// let model = ModelBuilder::new("1.0.0")
///     .snap(release_test_utils::model::snap_defaults())
///     .distribution(
///         Distribution::new("app", DistributionType::JavaBinary)
///             .with_artifact(Artifact::new("build/app-1.0.0.tar.gz")),
///     )
///     .build();
/// assert_eq!(model.distributions.len(), 1);
/// ```
pub struct ModelBuilder {
    model: Model,
}

impl ModelBuilder {
    pub fn new(version: &str) -> Self {
        Self {
            model: Model::new(
                Project::new("app", version),
                Release::new(ReleaseKind::Github, "acme", "app"),
            ),
        }
    }

    pub fn project(mut self, edit: impl FnOnce(&mut Project)) -> Self {
        edit(&mut self.model.project);
        self
    }

    pub fn release(mut self, release: Release) -> Self {
        self.model.release = release;
        self
    }

    pub fn packagers(mut self, edit: impl FnOnce(&mut Packagers)) -> Self {
        edit(&mut self.model.packagers);
        self
    }

    /// Replace the shared snap defaults.
    pub fn snap(self, snap: SnapPackager) -> Self {
        self.packagers(|p| p.snap = snap)
    }

    /// Replace the shared archive defaults.
    pub fn archive(self, archive: ArchivePackager) -> Self {
        self.packagers(|p| p.archive = archive)
    }

    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.model = self.model.with_distribution(distribution);
        self
    }

    pub fn build(self) -> Model {
        self.model
    }
}

/// Shared snap defaults that validate cleanly: always active, remote build.
pub fn snap_defaults() -> SnapPackager {
    let mut snap = SnapPackager {
        base: Some("core22".to_string()),
        grade: Some("stable".to_string()),
        confinement: Some("strict".to_string()),
        remote_build: Some(true),
        ..Default::default()
    };
    snap.common.active = Some(Active::Always);
    snap
}

/// Shared archive defaults that validate cleanly: always active, zip.
pub fn archive_defaults() -> ArchivePackager {
    let mut archive = ArchivePackager {
        formats: vec![ArchiveFormat::Zip],
        ..Default::default()
    };
    archive.common.active = Some(Active::Always);
    archive
}

/// A java-binary distribution with one artifact per path.
pub fn distribution(name: &str, paths: &[&str]) -> Distribution {
    paths
        .iter()
        .fold(Distribution::new(name, DistributionType::JavaBinary), |d, p| {
            d.with_artifact(Artifact::new(*p))
        })
}
