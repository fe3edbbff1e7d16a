//! Shared test utilities for the release-resolver workspace.
//!
//! This crate provides standardised fixtures so crate test suites do not
//! each rebuild models and probes by hand. It is a dev-dependency only and is
//! never published.
//!
//! # Modules
//!
//! - [`model`]: [`ModelBuilder`] plus ready-made packager defaults
//! - [`probe`]: in-memory and failing [`release_fs::PathProbe`]s
//! - [`workspace`]: [`TestWorkspace`], a temporary directory holding a descriptor

pub mod model;
pub mod probe;
pub mod workspace;

pub use model::ModelBuilder;
pub use probe::{FailingProbe, MemoryProbe};
pub use workspace::TestWorkspace;
