//! Whole-file load and save of the size cache

use crate::error::{PkgSizeError, PkgSizeResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// In-memory view of the size cache file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeCache {
    entries: BTreeMap<String, u64>,
}

impl SizeCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the cache from `path`, or an empty cache if the file is missing
    pub async fn load(path: &Path) -> PkgSizeResult<Self> {
        if !path.exists() {
            debug!("No size cache at {}, starting empty", path.display());
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).await.map_err(|e| PkgSizeError::CacheCorrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let entries: BTreeMap<String, u64> =
            serde_json::from_str(&content).map_err(|e| PkgSizeError::CacheCorrupt {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        debug!("Loaded {} cached sizes from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Write the full cache to `path`, replacing any previous contents
    ///
    /// The snapshot is written to a sibling temp file and renamed into place.
    pub async fn save(&self, path: &Path) -> PkgSizeResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await.map_err(|e| {
                PkgSizeError::io(format!("creating cache directory {}", parent.display()), e)
            })?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = temp_path(path);

        fs::write(&tmp, content)
            .await
            .map_err(|e| PkgSizeError::io(format!("writing cache file {}", tmp.display()), e))?;
        fs::rename(&tmp, path)
            .await
            .map_err(|e| PkgSizeError::io(format!("replacing cache file {}", path.display()), e))?;

        debug!("Saved {} cached sizes to {}", self.entries.len(), path.display());
        Ok(())
    }

    /// Delete the cache file if present; returns whether a file was removed
    pub async fn clear(path: &Path) -> PkgSizeResult<bool> {
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(path)
            .await
            .map_err(|e| PkgSizeError::io(format!("removing cache file {}", path.display()), e))?;
        Ok(true)
    }

    /// Cached size for a package
    pub fn get(&self, package: &str) -> Option<u64> {
        self.entries.get(package).copied()
    }

    /// Record the size of a package
    pub fn insert(&mut self, package: impl Into<String>, size: u64) {
        self.entries.insert(package.into(), size);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all cached sizes, saturating at `u64::MAX`
    pub fn total_bytes(&self) -> u64 {
        self.entries
            .values()
            .fold(0u64, |total, size| total.saturating_add(*size))
    }

    /// Entries in package name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
