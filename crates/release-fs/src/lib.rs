//! Filesystem abstraction for Release Resolver
//!
//! Provides normalized path handling, bounded text reads, and the
//! [`PathProbe`] seam the validator uses to check declared paths.

pub mod error;
pub mod io;
pub mod path;
pub mod probe;

pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use probe::{LocalFs, PathProbe};
