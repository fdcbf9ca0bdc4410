//! Top-N size estimation
//!
//! Walks the first N entries of a ranking in order, serving sizes from the
//! cache where possible and asking the registry otherwise. Lookups are
//! strictly sequential and the cache is saved once, after the loop.

use crate::cache::SizeCache;
use crate::error::PkgSizeResult;
use crate::registry::{lookup_size, Ranking, Registry, SizeLookup};
use crate::ui::EstimateProgress;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Bytes in one (binary) gigabyte
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Outcome of an estimation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Estimate {
    /// Count the operator asked for
    pub requested: i64,
    /// Packages actually walked (bounded by the ranking length)
    pub processed: usize,
    pub total_bytes: u64,
    pub cache_hits: usize,
    /// Registry lookups performed, including failed ones
    pub lookups: usize,
    pub failures: usize,
}

impl Estimate {
    pub fn gigabytes(&self) -> f64 {
        self.total_bytes as f64 / BYTES_PER_GB
    }

    /// Final report line
    pub fn summary(&self) -> String {
        format!(
            "Estimated total size of top {} packages: {:.2} GB",
            self.requested,
            self.gigabytes()
        )
    }
}

/// Estimate the combined size of the top `top_n` packages of `ranking`
pub async fn estimate(
    registry: &dyn Registry,
    ranking: &Ranking,
    top_n: i64,
    cache_path: &Path,
    progress: &EstimateProgress,
) -> PkgSizeResult<Estimate> {
    let mut cache = SizeCache::load(cache_path).await?;
    let selected = ranking.top(top_n);

    let mut result = Estimate {
        requested: top_n,
        processed: selected.len(),
        ..Estimate::default()
    };

    for package in selected {
        let name = package.project.as_str();
        progress.start_package(name);

        let size = match cache.get(name) {
            Some(size) => {
                result.cache_hits += 1;
                size
            }
            None => {
                result.lookups += 1;
                let lookup = lookup_size(registry, name).await;
                if let SizeLookup::Failed(ref e) = lookup {
                    result.failures += 1;
                    progress.lookup_failed(name, &e.to_string());
                }
                // Failures are cached as zero and not retried on later runs.
                cache.insert(name, lookup.size());
                lookup.size()
            }
        };

        debug!("{}: {} bytes", name, size);
        result.total_bytes = result.total_bytes.saturating_add(size);
        progress.finish_package();
    }

    progress.finish();
    cache.save(cache_path).await?;

    info!(
        "Processed {} packages: {} cached, {} looked up, {} failed",
        result.processed, result.cache_hits, result.lookups, result.failures
    );
    Ok(result)
}
