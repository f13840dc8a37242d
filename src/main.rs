//! Sumi-Reach main entry point
//!
//! This is the command-line interface for the Sumi-Reach site crawler.

use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use sumi_reach::config::{resolve_config, Config, ConfigOverrides, OutputFormat};
use sumi_reach::crawler::{run_crawl, user_agent_string};
use sumi_reach::output::{emit_report, CrawlReport};
use tracing_subscriber::EnvFilter;

/// Sumi-Reach: a depth-bounded, domain-scoped site crawler
///
/// Sumi-Reach fetches a seed page, records its title and links, and follows
/// the site-relative links concurrently until the depth budget runs out.
/// Each URL is fetched at most once.
#[derive(Parser, Debug)]
#[command(name = "sumi-reach")]
#[command(version)]
#[command(about = "A depth-bounded, domain-scoped site crawler", long_about = None)]
struct Cli {
    /// Seed URL to start crawling from
    #[arg(value_name = "SEED")]
    seed: Option<String>,

    /// Maximum crawl depth (0 or less crawls nothing)
    #[arg(short, long, allow_negative_numbers = true)]
    depth: Option<i32>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of fetches in flight at once (unbounded by default)
    #[arg(long, value_name = "N")]
    max_concurrent: Option<usize>,

    /// Per-request timeout in seconds (none by default)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and show what would be crawled without crawling
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed.clone(),
            max_depth: self.depth,
            max_concurrent_fetches: self.max_concurrent,
            request_timeout_secs: self.timeout,
            format: self.format,
            output_path: self.output.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }
    let config = match resolve_config(cli.config.as_deref(), cli.overrides()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_crawl(&config).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_reach=info,warn"),
            1 => EnvFilter::new("sumi_reach=debug,info"),
            2 => EnvFilter::new("sumi_reach=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so a report on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    println!("=== Sumi-Reach Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Seed: {}", config.crawler.seed);
    println!("  Max depth: {}", config.crawler.max_depth);
    match config.crawler.max_concurrent_fetches {
        Some(limit) => println!("  Max concurrent fetches: {}", limit),
        None => println!("  Max concurrent fetches: unbounded"),
    }
    match config.crawler.request_timeout_secs {
        Some(secs) => println!("  Request timeout: {}s", secs),
        None => println!("  Request timeout: none"),
    }

    println!("\nUser Agent:");
    println!("  {}", user_agent_string(config));

    println!("\nOutput:");
    println!("  Format: {:?}", config.output.format);
    match &config.output.path {
        Some(path) => println!("  Path: {}", path.display()),
        None => println!("  Path: stdout"),
    }

    println!("\n✓ Configuration is valid");
    if config.crawler.max_depth <= 0 {
        println!("✓ Depth {} would crawl nothing", config.crawler.max_depth);
    } else {
        println!("✓ Would start crawling from {}", config.crawler.seed);
    }
}

/// Handles the main crawl operation
async fn handle_crawl(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let started_at = Utc::now();

    let site = match run_crawl(config).await {
        Ok(site) => site,
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            return Err(e.into());
        }
    };

    let report = CrawlReport::from_site(&site, config.crawler.max_depth, started_at, Utc::now());
    emit_report(&report, &config.output)?;

    Ok(())
}
