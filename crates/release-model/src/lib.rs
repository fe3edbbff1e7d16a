//! Release descriptor model for Release Resolver.
//!
//! This crate holds the declarative model a release is described with
//! (project, release target, distributions, artifacts and the per-type
//! packager configurations) and the TOML loader that builds it. It performs
//! no validation; that is the job of `release-core`.

pub mod active;
pub mod artifact;
pub mod distribution;
pub mod error;
pub mod loader;
pub mod model;
pub mod packager;
pub mod project;
pub mod release;

pub use active::{Active, Phase};
pub use artifact::{Artifact, ArtifactType, Os};
pub use distribution::{Distribution, DistributionType};
pub use error::{Error, Result};
pub use loader::{load_model, parse_model};
pub use model::Model;
pub use packager::{
    ArchiveFormat, ArchivePackager, Architecture, BrewDependency, BrewPackager, CommitAuthor,
    NativeImagePackager, Packager, PackagerCommon, PackagerKind, Packagers, Plug, Slot,
    SnapPackager, Upx,
};
pub use project::{Project, SnapshotConfig};
pub use release::{Release, ReleaseKind};

/// Extra properties attached to model entities.
pub type ExtraProperties = std::collections::BTreeMap<String, serde_json::Value>;
