//! `release validate`

use colored::Colorize;
use release_core::{PackagerState, Resolution, Resolver};

use crate::cli::DescriptorArgs;
use crate::commands::load_descriptor;
use crate::error::{CliError, Result};

/// Validate the descriptor and report every configuration error.
pub fn run_validate(args: &DescriptorArgs, json: bool, parallel: bool) -> Result<()> {
    let (model, basedir) = load_descriptor(args)?;
    let resolution = Resolver::new()
        .basedir(basedir)
        .model(&model)
        .parallel(parallel)
        .resolve()?;

    if json {
        print_json(&resolution)?;
    } else {
        print_report(&resolution);
    }

    if resolution.is_success() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            count: resolution.errors.len(),
        })
    }
}

fn print_json(resolution: &Resolution) -> Result<()> {
    let distributions: Vec<_> = resolution
        .distributions
        .iter()
        .map(|d| {
            serde_json::json!({
                "name": d.name,
                "type": d.distribution_type,
                "enabled": d.enabled,
                "packagers": d.packagers.iter().map(|p| serde_json::json!({
                    "kind": p.kind,
                    "state": p.state,
                })).collect::<Vec<_>>(),
            })
        })
        .collect();

    let output = serde_json::json!({
        "phase": resolution.phase,
        "success": resolution.is_success(),
        "errors": resolution.errors,
        "distributions": distributions,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_report(resolution: &Resolution) {
    println!(
        "{} {}",
        "Project phase:".dimmed(),
        resolution.phase.to_string().cyan()
    );
    println!();

    for distribution in &resolution.distributions {
        let header = format!("{} ({})", distribution.name, distribution.distribution_type);
        if distribution.enabled {
            println!("{}", header.bold());
        } else {
            println!("{} {}", header.dimmed(), "inactive".dimmed());
            continue;
        }

        for outcome in &distribution.packagers {
            match outcome.state {
                PackagerState::Enabled => {
                    println!("  {} {}", "+".green(), outcome.kind);
                }
                PackagerState::Disabled { reason } => {
                    println!(
                        "  {} {} {}",
                        "-".dimmed(),
                        outcome.kind.to_string().dimmed(),
                        format!("({reason})").dimmed()
                    );
                }
            }
        }
    }
    println!();

    if resolution.is_success() {
        println!("{} Descriptor is valid", "OK".green().bold());
        return;
    }

    println!(
        "{} {} error(s):",
        "Validation failed".red().bold(),
        resolution.errors.len()
    );
    for error in &resolution.errors {
        println!("  {} {}", "x".red(), error);
    }
}
