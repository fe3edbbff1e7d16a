//! The complete release descriptor

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Distribution, Packagers, Project, Release};

/// Root of a release descriptor (`release.toml`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub project: Project,

    #[serde(default)]
    pub release: Release,

    /// Project-wide packager defaults
    #[serde(default)]
    pub packagers: Packagers,

    /// Distributions keyed and ordered by name
    #[serde(default)]
    pub distributions: BTreeMap<String, Distribution>,
}

impl Model {
    pub fn new(project: Project, release: Release) -> Self {
        Self {
            project,
            release,
            ..Self::default()
        }
    }

    /// Add a distribution under its own name, replacing any previous one.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distributions
            .insert(distribution.name.clone(), distribution);
        self
    }

    /// Copy every map key into the `name` of the distribution it holds.
    pub(crate) fn assign_names(&mut self) {
        for (name, distribution) in self.distributions.iter_mut() {
            distribution.name = name.clone();
        }
    }
}
