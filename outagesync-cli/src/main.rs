// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! OutageSync CLI - site outage reporting from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Report outages for the default site
//! outagesync
//!
//! # Report outages for a specific site
//! outagesync --site kingfisher
//!
//! # Show request-level detail
//! outagesync --verbose
//!
//! # Suppress all output
//! outagesync --quiet
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use outagesync_api::{run_site_report, ApiClient, ApiConfig, OutageApi, ReportOutcome};

/// Site reported when no `--site` flag is given.
const DEFAULT_SITE_ID: &str = "norwich-pear-tree";

// ============================================================================
// CLI Definition
// ============================================================================

/// OutageSync CLI - site outage reporting.
#[derive(Parser)]
#[command(name = "outagesync")]
#[command(about = "Site outage reporting CLI")]
#[command(long_about = r#"
OutageSync fetches outages from the outage API, keeps the ones that
belong to a site's devices and began during the reporting window,
attaches device names, and submits the result back to the API.

Configuration is read from the environment:
  BASE_URL   Base URL of the outage API
  API_KEY    Key sent in the x-api-key header

Examples:
  outagesync                       # Default site (norwich-pear-tree)
  outagesync --site kingfisher     # Specific site
  outagesync --verbose             # Request-level detail
"#)]
#[command(version)]
#[command(author = "OutageSync Contributors")]
pub struct Cli {
    /// Site to report outages for.
    #[arg(long, short, default_value = DEFAULT_SITE_ID)]
    pub site: String,

    /// Verbose output (show debug info).
    #[arg(long, short)]
    pub verbose: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short)]
    pub quiet: bool,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool) {
    if quiet {
        return; // No logging in quiet mode
    }

    let filter = if verbose {
        EnvFilter::new("outagesync=debug,info")
    } else {
        EnvFilter::new("outagesync=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(&cli).await {
        if !cli.quiet {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Runs a report for the selected site.
///
/// A failed run is not an error: the failure has already been logged, and
/// the process exits successfully so scheduled invocations keep running.
async fn run(cli: &Cli) -> Result<()> {
    let config = ApiConfig::from_env()
        .context("API configuration missing; set BASE_URL and API_KEY")?;

    debug!(site = %cli.site, "Starting outage report");

    let client = ApiClient::new(config)?;
    let api = OutageApi::new(client);

    match run_site_report(&api, &cli.site).await {
        ReportOutcome::Submitted { count } => {
            if !cli.quiet {
                println!("Submitted {} outage(s) for site {}", count, cli.site);
            }
        }
        ReportOutcome::Aborted(_) => {
            // Already logged by the endpoint layer.
        }
    }

    Ok(())
}
