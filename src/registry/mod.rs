//! Package index access
//!
//! Provides a trait for the two remote calls the estimator needs, so the
//! pipeline can run against PyPI or against a stub in tests.

pub mod http;
pub mod pypi;
pub mod ranking;

pub use http::HttpClient;
pub use pypi::PypiRegistry;
pub use ranking::{fetch_ranking, RankedPackage, Ranking};

use crate::error::{PkgSizeError, PkgSizeResult};
use async_trait::async_trait;
use tracing::{debug, warn};

/// Abstract package index interface
#[async_trait]
pub trait Registry: Send + Sync {
    /// Fetch the popularity ranking, most-downloaded first
    async fn fetch_ranking(&self) -> PkgSizeResult<Ranking>;

    /// Total size in bytes of the files of a package's current release
    async fn release_size(&self, package: &str) -> PkgSizeResult<u64>;

    /// Human-readable index name for display
    fn registry_name(&self) -> &'static str;
}

/// Result of a best-effort size lookup
#[derive(Debug)]
pub enum SizeLookup {
    Found(u64),
    Failed(PkgSizeError),
}

impl SizeLookup {
    /// Size to account for; failures count as zero
    pub fn size(&self) -> u64 {
        match self {
            Self::Found(size) => *size,
            Self::Failed(_) => 0,
        }
    }
}

/// Look up a package size, absorbing every failure into `SizeLookup::Failed`
pub async fn lookup_size(registry: &dyn Registry, package: &str) -> SizeLookup {
    match registry.release_size(package).await {
        Ok(size) => SizeLookup::Found(size),
        Err(e) if e.is_per_package() => {
            debug!("Lookup for {} failed: {}", package, e);
            SizeLookup::Failed(e)
        }
        Err(e) => {
            warn!("Unexpected error looking up {}: {}", package, e);
            SizeLookup::Failed(e)
        }
    }
}
