//! `release show <distribution>`

use colored::Colorize;
use release_core::Resolver;

use crate::cli::DescriptorArgs;
use crate::commands::load_descriptor;
use crate::error::{CliError, Result};

/// Print the enabled packagers of one distribution with their resolved values.
pub fn run_show(args: &DescriptorArgs, name: &str, json: bool) -> Result<()> {
    let (model, basedir) = load_descriptor(args)?;
    let resolution = Resolver::new().basedir(basedir).model(&model).resolve()?;

    let distribution = resolution.distribution(name).ok_or_else(|| {
        CliError::user(format!(
            "Unknown distribution '{}'. Known: {}",
            name,
            model
                .distributions
                .keys()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })?;

    if !resolution.is_success() {
        eprintln!(
            "{}: descriptor has {} validation error(s); run 'release validate' for details",
            "warning".yellow().bold(),
            resolution.errors.len()
        );
    }

    if json {
        let output = serde_json::json!({
            "name": distribution.name,
            "type": distribution.distribution_type,
            "enabled": distribution.enabled,
            "packagers": distribution.enabled_packagers().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} ({})",
        distribution.name.bold(),
        distribution.distribution_type
    );

    let mut shown = 0;
    for outcome in distribution.enabled_packagers() {
        shown += 1;
        println!();
        println!("  {}", outcome.kind.to_string().green().bold());

        if !outcome.candidates.is_empty() {
            println!("    {}:", "Artifacts".dimmed());
            for artifact in &outcome.candidates {
                match artifact.platform() {
                    Some(platform) => println!("      {} [{}]", artifact.path, platform),
                    None => println!("      {}", artifact.path),
                }
            }
        }

        if !outcome.resolved.is_empty() {
            println!("    {}:", "Resolved".dimmed());
            for (key, value) in &outcome.resolved {
                println!("      {:<28} {}", key, value);
            }
        }

        if let Some(effective) = &outcome.effective {
            println!("    {}:", "Effective".dimmed());
            let rendered = serde_json::to_string_pretty(effective)?;
            for line in rendered.lines() {
                println!("      {line}");
            }
        }
    }

    if shown == 0 {
        println!("  {}", "(no enabled packagers)".dimmed());
    }

    Ok(())
}
