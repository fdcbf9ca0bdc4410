//! Error types for pkgsize
//!
//! All modules use `PkgSizeResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pkgsize operations
pub type PkgSizeResult<T> = Result<T, PkgSizeError>;

/// All errors that can occur in pkgsize
#[derive(Error, Debug)]
pub enum PkgSizeError {
    // Ranking errors
    #[error("Failed to fetch package ranking from {url}: {reason}")]
    RankingFetch { url: String, reason: String },

    #[error("Malformed package ranking from {url}: {reason}")]
    RankingMalformed { url: String, reason: String },

    // Metadata errors (absorbed into a zero size by the estimator)
    #[error("metadata request failed: {0}")]
    MetadataFetch(String),

    #[error("malformed metadata: {0}")]
    MetadataMalformed(String),

    #[error("version {version} not found in releases")]
    VersionNotReleased { version: String },

    // Cache errors
    #[error("Cache file {path} is not a valid size cache: {reason}")]
    CacheCorrupt { path: PathBuf, reason: String },

    // Input errors
    #[error("Invalid package count: {0:?} is not an integer")]
    InvalidCount(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl PkgSizeError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether the error only affects a single package lookup
    pub fn is_per_package(&self) -> bool {
        matches!(
            self,
            Self::MetadataFetch(_) | Self::MetadataMalformed(_) | Self::VersionNotReleased { .. }
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::RankingFetch { .. } => {
                Some("Check your network connection or set sources.ranking_url")
            }
            Self::CacheCorrupt { .. } => Some("Run: pkgsize cache clear"),
            Self::InvalidCount(_) => Some("Enter a whole number such as 100 or 1000"),
            Self::ConfigInvalid { .. } => Some("Run: pkgsize config init --force"),
            _ => None,
        }
    }
}
