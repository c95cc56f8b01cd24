//! Export-log command - copy the failure log to a chosen location.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use super::config::load_config;

/// Arguments for the export-log command.
#[derive(Args)]
pub struct ExportLogArgs {
    /// Destination path for the copied log
    destination: PathBuf,

    /// Log file to copy (defaults to the configured location)
    #[arg(long)]
    log: Option<PathBuf>,
}

pub fn run(args: ExportLogArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let source = args.log.unwrap_or_else(|| config.log.path.clone());

    if !source.exists() {
        anyhow::bail!("No log file found at {}", source.display());
    }

    fs::copy(&source, &args.destination)?;

    println!(
        "{} Copied {} to {}",
        style("✓").green(),
        source.display(),
        args.destination.display()
    );

    Ok(())
}
