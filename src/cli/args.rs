//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pkgsize - estimate the disk footprint of popular packages
///
/// Sums the release sizes of the N most-downloaded packages of a package
/// index, caching per-package sizes between runs.
#[derive(Parser, Debug)]
#[command(name = "pkgsize")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PKGSIZE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Size cache file (overrides cache.path)
    #[arg(long, global = true)]
    pub cache_file: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate the total size of the top N packages
    Estimate(EstimateArgs),

    /// Inspect or clear the size cache
    Cache(CacheArgs),

    /// Show or initialize configuration
    Config(ConfigArgs),
}

/// Arguments for the estimate command
#[derive(Parser, Debug)]
pub struct EstimateArgs {
    /// Number of top packages to process (prompted for if omitted)
    #[arg(allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Ranking document URL (overrides sources.ranking_url)
    #[arg(long)]
    pub ranking_url: Option<String>,

    /// Metadata URL template with {package} (overrides sources.metadata_url)
    #[arg(long)]
    pub metadata_url: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for cache listing
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    /// Subcommand for cache
    #[command(subcommand)]
    pub action: CacheAction,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// List cached package sizes
    Show {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the cache file path
    Path,

    /// Delete the cache file
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}
