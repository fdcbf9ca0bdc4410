//! pkgsize - estimate the disk footprint of popular packages
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use pkgsize::cli::{Cli, Commands};
use pkgsize::config::{Config, ConfigManager};
use pkgsize::error::PkgSizeResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PkgSizeResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    let mut config = config_manager.load().await?;
    init_logging(cli.verbose, &config);
    debug!("Using config {}", config_manager.path().display());

    if let Some(path) = cli.cache_file {
        config.cache.path = path;
    }

    match cli.command {
        Commands::Estimate(args) => pkgsize::cli::commands::estimate(args, &config).await,
        Commands::Cache(args) => pkgsize::cli::commands::cache(args, &config).await,
        Commands::Config(args) => {
            pkgsize::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// Logging: 0 = warn, 1 = info, 2+ = debug, always on stderr
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("pkgsize=warn"),
        1 => EnvFilter::new("pkgsize=info"),
        _ => EnvFilter::new("pkgsize=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
