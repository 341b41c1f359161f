//! Skill-Scout main entry point
//!
//! This is the command-line interface: it obtains the discovery report, parses
//! it, enriches the entries and prints them.

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use skill_scout::config::{load_config_with_hash, Config};
use skill_scout::enrich::{enrich_all, skip_all, Enricher};
use skill_scout::output::{log_statistics, render_empty, render_entries, RunStatistics};
use skill_scout::report::{parse_report, ReportSource};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Exit code for discovery, configuration and other fatal failures.
/// Argument errors exit with clap's usage code, 2.
const EXIT_FAILURE: u8 = 1;

/// Skill-Scout: describe what a skill search turned up
///
/// Runs the skill discovery tool for QUERY, then fetches every result's page
/// and prints a short description under each one.
#[derive(Parser, Debug)]
#[command(name = "skill-scout")]
#[command(version)]
#[command(about = "Enrich skill search results with descriptions", long_about = None)]
struct Cli {
    /// Search query passed to the discovery tool
    #[arg(value_name = "QUERY", required_unless_present = "input")]
    query: Vec<String>,

    /// Maximum number of entries to enrich [default: 10]
    #[arg(long, value_name = "N")]
    max: Option<usize>,

    /// Per-fetch timeout in seconds, redirects included [default: 10]
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Number of pages fetched in parallel [default: 5]
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Print entries without fetching descriptions
    #[arg(long)]
    no_fetch: bool,

    /// Do not try the mirror page when a page yields nothing
    #[arg(long)]
    no_fallback: bool,

    /// Read the report from FILE ('-' for stdin) instead of running discovery
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let query = cli.query.join(" ").trim().to_string();
    if query.is_empty() && cli.input.is_none() {
        Cli::command()
            .error(ErrorKind::MissingRequiredArgument, "Missing query")
            .exit();
    }

    match run(cli, query).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// `RUST_LOG` takes precedence over `-v`. Logs go to stderr; stdout is reserved
/// for the rendered entries.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else if let Ok(filter) = EnvFilter::try_from_default_env() {
        filter
    } else {
        EnvFilter::new(verbosity_directives(verbose))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Filter directives for `-v` counts; dependencies stay at info or quieter
fn verbosity_directives(verbose: u8) -> &'static str {
    match verbose {
        0 => "skill_scout=warn,warn",
        1 => "skill_scout=info,warn",
        2 => "skill_scout=debug,info",
        _ => "skill_scout=trace,info",
    }
}

/// Loads the configuration file if one was given, otherwise the defaults
fn load_settings(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    tracing::debug!("Configuration loaded (hash: {})", hash);
    Ok(config)
}

/// Command-line flags win over the configuration file
fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(max) = cli.max {
        config.enrich.max_entries = max;
    }
    if let Some(timeout) = cli.timeout {
        config.enrich.timeout_secs = timeout;
    }
    if let Some(concurrency) = cli.concurrency {
        config.enrich.concurrency = concurrency;
    }
    if cli.no_fallback {
        config.fallback.enabled = false;
    }
}

/// Handles one complete run
async fn run(cli: Cli, query: String) -> anyhow::Result<()> {
    let mut config = load_settings(cli.config.as_deref())?;
    apply_overrides(&cli, &mut config);

    let source = match cli.input.clone() {
        Some(path) => {
            if !query.is_empty() {
                tracing::warn!("Reading report from input; query {:?} is ignored", query);
            }
            ReportSource::from_input(path)
        }
        None => ReportSource::command(&config.discovery, query),
    };

    let raw = source
        .load()
        .await
        .context("failed to obtain the skill report")?;

    let entries = parse_report(&raw);
    if entries.is_empty() {
        render_empty(&mut std::io::stdout().lock())?;
        return Ok(());
    }

    let limited: Vec<_> = entries
        .into_iter()
        .take(config.enrich.max_entries)
        .collect();
    tracing::info!("Enriching {} entries", limited.len());

    let start_time = Instant::now();
    let enriched = if cli.no_fetch {
        skip_all(limited)
    } else {
        let enricher = Arc::new(Enricher::from_config(&config)?);
        enrich_all(enricher, limited, config.enrich.concurrency).await?
    };
    log_statistics(&RunStatistics::from_entries(&enriched), start_time.elapsed());

    render_entries(&mut std::io::stdout().lock(), &enriched)?;
    Ok(())
}
