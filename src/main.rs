//! Prefix Matcher - Main entrypoint.
//!
//! This is the main entry point for the prefix matcher application. It
//! initializes the logging system, loads configuration, loads the prefix
//! dictionary, and matches candidate strings against it.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;

use prefix_matcher::config::{self, ConfigLoader, MatcherConfig};
use prefix_matcher::error::{config::ConfigError, MatcherError, MatcherResult};
use prefix_matcher::matcher::PrefixMatcher;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "PREFIX_MATCHER";

/// Command line arguments for the prefix matcher.
#[derive(Parser, Debug)]
#[clap(name = "prefix-matcher", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Path to the prefix file, one prefix per line (overrides configuration)
    #[clap(short, long, value_parser)]
    prefixes: Option<PathBuf>,

    /// Candidate strings to match; read from stdin when omitted
    inputs: Vec<String>,
}

/// Initialize the logging system.
fn init_logging() -> MatcherResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| MatcherError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> MatcherResult<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Load configuration; a missing file is only acceptable when no file
    // was explicitly requested
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(ConfigError::FileNotFound(path)) if args.config.is_none() => {
            tracing::warn!("Configuration file not found at {}, using defaults", path.display());
            MatcherConfig::default()
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // Publish the resolved configuration for the rest of the process
    config::init_global_config(config.clone());

    let prefix_file = args
        .prefixes
        .unwrap_or_else(|| config.prefixes.file.clone());

    // Build phase: the dictionary must be fully loaded before any query
    let mut matcher = PrefixMatcher::new();
    let loaded = matcher.load_prefixes(&prefix_file)?;
    info!(count = loaded, file = %prefix_file.display(), "prefixes loaded");

    if args.inputs.is_empty() {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            report_match(&matcher, &line?)?;
        }
    } else {
        for input in &args.inputs {
            report_match(&matcher, input)?;
        }
    }

    Ok(())
}

/// Queries the matcher and prints the matched prefix, if any.
fn report_match(matcher: &PrefixMatcher, input: &str) -> MatcherResult<()> {
    if let Some(prefix) = matcher.find_longest_prefix(input)? {
        println!("{prefix}");
    }
    Ok(())
}
