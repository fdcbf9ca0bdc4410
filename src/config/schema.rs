//! Configuration schema for pkgsize
//!
//! Configuration is stored at `~/.config/pkgsize/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default ranking document (top PyPI packages by downloads)
pub const DEFAULT_RANKING_URL: &str =
    "https://hugovk.github.io/top-pypi-packages/top-pypi-packages.min.json";

/// Default per-package metadata endpoint; `{package}` is substituted
pub const DEFAULT_METADATA_URL: &str = "https://pypi.org/pypi/{package}/json";

/// Default cache file, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = "pypi_package_sizes.json";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Remote endpoints
    pub sources: SourcesConfig,

    /// Size cache settings
    pub cache: CacheConfig,

    /// HTTP client settings
    pub http: HttpConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Ranking and metadata endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// URL of the ranking document
    pub ranking_url: String,

    /// Metadata URL template containing `{package}`
    pub metadata_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            ranking_url: DEFAULT_RANKING_URL.to_string(),
            metadata_url: DEFAULT_METADATA_URL.to_string(),
        }
    }
}

/// Size cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Path of the cache file
    pub path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CACHE_FILE),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Global per-request timeout in seconds; unset means wait indefinitely
    pub timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: format!("pkgsize/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
