//! medpolicy-scraper main entry point
//!
//! This is the command-line interface for the medical policy code scraper.

use anyhow::Context;
use clap::Parser;
use medpolicy_scraper::config::{load_config_or_default, Config};
use medpolicy_scraper::crawler::Scraper;
use medpolicy_scraper::output::{
    compute_statistics, export_tables, generate_markdown_summary, print_statistics,
    render_codes_table, render_links_table, ScrapeReport,
};
use medpolicy_scraper::url::parse_seed_input;
use medpolicy_scraper::ScrapeError;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// medpolicy-scraper: billing code harvester for medical policy pages
///
/// Fetches each seed page, follows links to PDF and HTML policy documents,
/// and extracts CPT, HCPCS and PLA codes from them. Writes a policy link
/// table and a code index as CSV.
#[derive(Parser, Debug)]
#[command(name = "medpolicy-scraper")]
#[command(version)]
#[command(about = "Extract billing codes from medical policy pages", long_about = None)]
struct Cli {
    /// Seed URLs (commas inside an argument also separate URLs)
    #[arg(value_name = "URL")]
    urls: Vec<String>,

    /// Read seed URLs from a file, comma- or newline-delimited
    #[arg(short, long, value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Skip downloading and parsing PDF policy documents
    #[arg(long)]
    skip_pdf: bool,

    /// Directory for the CSV output (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Show the configuration and parsed seeds without fetching anything
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_config_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;
    if let Some(dir) = &cli.output_dir {
        config.output.directory = dir.clone();
    }
    if cli.skip_pdf {
        config.scrape.skip_pdf = true;
    }

    let raw_input = gather_seed_input(&cli, &config)?;

    if cli.dry_run {
        handle_dry_run(&config, &raw_input);
        return Ok(());
    }

    handle_scrape(config, &raw_input).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("medpolicy_scraper=info,warn"),
            1 => EnvFilter::new("medpolicy_scraper=debug,info"),
            2 => EnvFilter::new("medpolicy_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Collects seed input from arguments, the input file, or the config file
///
/// Command-line URLs and the input file are combined; the configured seeds
/// are used only when neither is given.
fn gather_seed_input(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let mut parts = cli.urls.clone();

    if let Some(path) = &cli.input_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file {}", path.display()))?;
        parts.push(content);
    }

    if parts.is_empty() {
        parts = config.scrape.seeds.clone();
    }

    Ok(parts.join("\n"))
}

/// Handles the --dry-run mode: shows configuration and parsed seeds
fn handle_dry_run(config: &Config, raw_input: &str) {
    println!("=== medpolicy-scraper Dry Run ===\n");

    println!("Fetch Configuration:");
    println!("  Page timeout: {}s", config.fetch.page_timeout_secs);
    println!("  PDF timeout: {}s", config.fetch.pdf_timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);
    println!("  User agent: {}", config.user_agent.header_value());

    println!("\nOutput:");
    println!("  Links: {}", config.output.links_path().display());
    println!("  Codes: {}", config.output.codes_path().display());
    if let Some(summary) = &config.output.summary_path {
        println!("  Summary: {}", summary.display());
    }

    let seeds = parse_seed_input(raw_input);
    println!("\nSeeds ({}):", seeds.len());
    for seed in &seeds {
        println!("  - {}", seed);
    }

    println!(
        "\nPDF crawling: {}",
        if config.scrape.skip_pdf { "skipped" } else { "enabled" }
    );
    if seeds.is_empty() {
        println!("\n✗ No seed URLs to scrape");
    } else {
        println!("\n✓ Would scrape {} seed URL(s)", seeds.len());
    }
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config, raw_input: &str) -> anyhow::Result<()> {
    let skip_pdf = config.scrape.skip_pdf;
    let output = config.output.clone();
    let mut scraper = Scraper::new(config)?;

    let report = match scraper.run(raw_input, skip_pdf).await {
        Ok(report) => report,
        Err(ScrapeError::EmptyInput) => {
            eprintln!("Please enter at least one valid URL.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_report(&report);

    let files = export_tables(&report, &output)?;
    println!("Saved link table to {}", files.links_path.display());
    if let Some(codes_path) = &files.codes_path {
        println!("Saved code index to {}", codes_path.display());
    }

    if let Some(summary_path) = &output.summary_path {
        generate_markdown_summary(&report, summary_path)?;
        println!("Saved summary to {}", summary_path.display());
    }

    Ok(())
}

/// Prints both tables and the statistics block
fn print_report(report: &ScrapeReport) {
    println!("\n=== Policy Links ===\n");
    print!("{}", render_links_table(&report.links));

    println!("\n=== Code Index ===\n");
    match report.code_index() {
        Some(codes) => print!("{}", render_codes_table(codes)),
        None => println!("No codes found."),
    }
    println!();

    print_statistics(&compute_statistics(report));
    println!();
}
