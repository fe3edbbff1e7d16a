//! Candidate artifact selection
//!
//! A distribution's artifacts are deduplicated and ordered by normalized path
//! before a packager's predicate sees them, so each distinct artifact is
//! evaluated exactly once and the result is deterministic.

use std::collections::BTreeMap;

use release_fs::NormalizedPath;
use release_model::Artifact;

/// How many candidates a packager expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    ExactlyOne,
    AtLeastOne,
}

/// Outcome of checking a candidate list against a [`Cardinality`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// No candidate; the packager is disabled without an error
    Empty,
    Selected(Vec<Artifact>),
    /// More candidates than the packager can handle
    Ambiguous(Vec<Artifact>),
}

impl Cardinality {
    pub fn check(self, candidates: Vec<Artifact>) -> Selection {
        match (self, candidates.len()) {
            (_, 0) => Selection::Empty,
            (Cardinality::ExactlyOne, n) if n > 1 => Selection::Ambiguous(candidates),
            _ => Selection::Selected(candidates),
        }
    }
}

/// Filter `artifacts` with `predicate`, deduplicated and ordered by path.
///
/// When two artifacts share a normalized path the first one wins.
pub fn select_candidates<F>(artifacts: &[Artifact], mut predicate: F) -> Vec<Artifact>
where
    F: FnMut(&Artifact) -> bool,
{
    let mut distinct: BTreeMap<NormalizedPath, &Artifact> = BTreeMap::new();
    for artifact in artifacts {
        distinct.entry(artifact.normalized_path()).or_insert(artifact);
    }

    distinct
        .into_values()
        .filter(|artifact| predicate(artifact))
        .cloned()
        .collect()
}
