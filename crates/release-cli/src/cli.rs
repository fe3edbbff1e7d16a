//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Release Resolver - Validate and resolve release descriptors
#[derive(Parser, Debug)]
#[command(name = "release")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the descriptor lives and what relative paths resolve against
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct DescriptorArgs {
    /// Release descriptor to load
    #[arg(short, long, default_value = "release.toml", env = "RELEASE_DESCRIPTOR")]
    pub file: PathBuf,

    /// Base directory for relative paths (defaults to the descriptor's directory)
    #[arg(short, long)]
    pub basedir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate every distribution and packager in the descriptor
    ///
    /// Prints every configuration error and exits non-zero when any exist.
    ///
    /// Examples:
    ///   release validate
    ///   release validate -f dist/release.toml --json
    Validate {
        #[command(flatten)]
        descriptor: DescriptorArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Resolve distributions in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Show the effective packager configuration of a distribution
    Show {
        #[command(flatten)]
        descriptor: DescriptorArgs,

        /// Distribution name
        distribution: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
