//! Resolution and validation engine for Release Resolver
//!
//! Takes a loaded [`release_model::Model`] and produces, for every
//! distribution and packager type, the effective packager configuration:
//!
//! - activation modes are evaluated against the project phase
//! - distribution overrides are merged with the shared packager defaults
//! - candidate artifacts are selected per packager type
//! - name templates are resolved against the property bag
//! - every configuration problem is collected, never thrown
//!
//! The entry point is [`Resolver`].

pub mod activation;
pub mod assets;
pub mod error;
pub mod errors;
pub mod merge;
pub mod props;
pub mod selector;
pub mod template;
pub mod validate;

pub use activation::{Activatable, detect_phase};
pub use assets::{ReleaseAsset, release_assets};
pub use error::{Error, Result};
pub use errors::{ErrorCategory, Errors, ValidationError};
pub use merge::Merge;
pub use props::Props;
pub use selector::{Cardinality, Selection, select_candidates};
pub use template::resolve_template;
pub use validate::{
    Capability, DisabledReason, EffectivePackager, PackagerOutcome, PackagerRules, PackagerState,
    ReleaseTarget, Resolution, ResolvedDistribution, Resolver, Stage,
};
