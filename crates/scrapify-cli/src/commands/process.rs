//! Process command - scrape every company in an input workbook.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use scrapify_core::batch::run_batch;
use scrapify_core::extract::ProfileParser;
use scrapify_core::fetch::{ReqwestTransport, Scraper};
use scrapify_core::log::RunLog;
use scrapify_core::sheet::{read_identifiers, write_report};

use super::config::load_config;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input workbook with a company-number column
    #[arg(short, long)]
    input: PathBuf,

    /// Output workbook path (defaults to a timestamped name)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Failure log path (defaults to the configured location)
    #[arg(long)]
    log: Option<PathBuf>,

    /// Process at most this many company numbers
    #[arg(long)]
    limit: Option<usize>,
}

pub fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input workbook not found: {}", args.input.display());
    }

    let mut identifiers = read_identifiers(&args.input, &config.registry)?;
    if let Some(limit) = args.limit {
        identifiers.truncate(limit);
    }

    if identifiers.is_empty() {
        anyhow::bail!("No company numbers found in {}", args.input.display());
    }

    println!(
        "{} Found {} company numbers to process",
        style("ℹ").blue(),
        identifiers.len()
    );

    let urls: Vec<String> = identifiers
        .iter()
        .map(|identifier| config.company_url(identifier))
        .collect();

    let log_path = args.log.clone().unwrap_or_else(|| config.log.path.clone());
    let log = Arc::new(RunLog::open(&log_path)?);

    let parser = ProfileParser::new().with_registry_base(config.registry.url_base.clone());
    let transport = ReqwestTransport::new(&config.fetch)?;
    let scraper = Scraper::new(transport, parser, log, config.fetch.clone());

    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} companies")
            .unwrap()
            .progress_chars("=>-"),
    );

    let report = run_batch(&scraper, &urls, |_url, _outcome| pb.inc(1));

    pb.finish_and_clear();

    let output_path = args.output.clone().unwrap_or_else(default_output_path);
    write_report(&output_path, &report)?;

    // Print summary
    println!();
    println!(
        "{} Processed {} companies in {:.2}s",
        style("✓").green(),
        report.total(),
        start.elapsed().as_secs_f64()
    );
    println!(
        "   {} scraped, {} invalid, {} erroneous",
        style(report.records.len()).green(),
        style(report.invalid_links.len()).yellow(),
        style(report.erroneous_links.len()).red()
    );
    println!(
        "{} Results saved to {}",
        style("✓").green(),
        output_path.display()
    );

    if !report.invalid_links.is_empty() {
        println!();
        println!("{}", style("Invalid links:").yellow());
        for url in &report.invalid_links {
            println!("  - {}", url);
        }
    }

    if !report.erroneous_links.is_empty() {
        println!();
        println!("{}", style("Erroneous links:").red());
        for url in &report.erroneous_links {
            println!("  - {}", url);
        }
    }

    if !report.invalid_links.is_empty() || !report.erroneous_links.is_empty() {
        println!();
        println!(
            "{} Failure details appended to {}",
            style("ℹ").blue(),
            log_path.display()
        );
    }

    Ok(())
}

/// Timestamped default output name, e.g. `scraped_company_info_2024-05-01-14-30.xlsx`.
fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "scraped_company_info_{}.xlsx",
        Local::now().format("%Y-%m-%d-%H-%M")
    ))
}
