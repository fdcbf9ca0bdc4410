//! PyPI JSON API client

use crate::config::Config;
use crate::error::{PkgSizeError, PkgSizeResult};
use crate::registry::http::{FetchError, HttpClient};
use crate::registry::ranking::{fetch_ranking, Ranking};
use crate::registry::Registry;
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

/// Project metadata, reduced to the fields needed for sizing
#[derive(Debug, Deserialize)]
struct ProjectMetadata {
    info: ProjectInfo,
    #[serde(default)]
    releases: HashMap<String, Vec<ReleaseFile>>,
}

#[derive(Debug, Deserialize)]
struct ProjectInfo {
    /// Current (latest) version
    version: String,
}

/// One distributable file of a release
#[derive(Debug, Deserialize)]
struct ReleaseFile {
    #[serde(default)]
    size: Option<u64>,
}

impl ProjectMetadata {
    /// Total bytes of the files published for the current version
    fn current_release_size(&self) -> PkgSizeResult<u64> {
        let version = &self.info.version;
        let files = self
            .releases
            .get(version)
            .ok_or_else(|| PkgSizeError::VersionNotReleased {
                version: version.clone(),
            })?;

        files
            .iter()
            .filter_map(|f| f.size)
            .try_fold(0u64, |total, size| total.checked_add(size))
            .ok_or_else(|| {
                PkgSizeError::MetadataMalformed(format!(
                    "release {} file sizes overflow a 64-bit total",
                    version
                ))
            })
    }
}

/// Ranking and metadata lookups against PyPI-compatible endpoints
pub struct PypiRegistry {
    http: HttpClient,
    ranking_url: String,
    metadata_url: String,
}

impl PypiRegistry {
    pub fn new(http: HttpClient, ranking_url: String, metadata_url: String) -> Self {
        Self {
            http,
            ranking_url,
            metadata_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            HttpClient::new(&config.http),
            config.sources.ranking_url.clone(),
            config.sources.metadata_url.clone(),
        )
    }

    /// Metadata URL for a package
    pub fn metadata_url(&self, package: &str) -> String {
        self.metadata_url.replace("{package}", package)
    }
}

#[async_trait]
impl Registry for PypiRegistry {
    async fn fetch_ranking(&self) -> PkgSizeResult<Ranking> {
        fetch_ranking(&self.http, &self.ranking_url).await
    }

    async fn release_size(&self, package: &str) -> PkgSizeResult<u64> {
        let url = self.metadata_url(package);

        let metadata = match self.http.get_json::<ProjectMetadata>(&url).await? {
            Ok(metadata) => metadata,
            Err(FetchError::Transport(reason)) => return Err(PkgSizeError::MetadataFetch(reason)),
            Err(FetchError::Decode(reason)) => {
                return Err(PkgSizeError::MetadataMalformed(reason))
            }
        };

        let size = metadata.current_release_size()?;
        debug!("{} {} -> {} bytes", package, metadata.info.version, size);
        Ok(size)
    }

    fn registry_name(&self) -> &'static str {
        "PyPI"
    }
}
