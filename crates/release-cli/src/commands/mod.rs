//! Command implementations for release-cli

pub mod show;
pub mod validate;

pub use show::run_show;
pub use validate::run_validate;

use release_fs::NormalizedPath;
use release_model::{Model, load_model};

use crate::cli::DescriptorArgs;
use crate::error::Result;

/// Load the descriptor and work out the base directory.
///
/// Relative paths are taken from the current directory. Without an explicit
/// base directory the descriptor's own directory is used.
pub(crate) fn load_descriptor(args: &DescriptorArgs) -> Result<(Model, NormalizedPath)> {
    let cwd = NormalizedPath::new(std::env::current_dir()?);
    let file = NormalizedPath::new(&args.file).resolve_against(&cwd);

    let basedir = match &args.basedir {
        Some(dir) => NormalizedPath::new(dir).resolve_against(&cwd),
        None => file.parent().unwrap_or(cwd),
    };

    tracing::debug!(descriptor = %file, basedir = %basedir, "Loading descriptor");
    let model = load_model(&file)?;
    Ok((model, basedir))
}
