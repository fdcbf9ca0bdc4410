//! Ranking document: packages ordered by download count, most popular first

use crate::error::{PkgSizeError, PkgSizeResult};
use crate::registry::http::{FetchError, HttpClient};
use serde::{Deserialize, Serialize};
use tracing::info;

/// One entry of the ranking; its position in `Ranking::rows` is its rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPackage {
    /// Package identifier
    pub project: String,

    /// Downloads over the ranking window, when the source reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
}

impl RankedPackage {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            download_count: None,
        }
    }
}

/// Decoded ranking document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ranking {
    /// When the source last regenerated the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,

    pub rows: Vec<RankedPackage>,
}

impl Ranking {
    pub fn from_rows(rows: Vec<RankedPackage>) -> Self {
        Self {
            last_update: None,
            rows,
        }
    }

    /// The first `top_n` packages; a non-positive count selects nothing
    pub fn top(&self, top_n: i64) -> &[RankedPackage] {
        let n = usize::try_from(top_n).unwrap_or(0).min(self.rows.len());
        &self.rows[..n]
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Fetch and decode the ranking document at `url`
pub async fn fetch_ranking(http: &HttpClient, url: &str) -> PkgSizeResult<Ranking> {
    let ranking = match http.get_json::<Ranking>(url).await? {
        Ok(ranking) => ranking,
        Err(FetchError::Transport(reason)) => {
            return Err(PkgSizeError::RankingFetch {
                url: url.to_string(),
                reason,
            })
        }
        Err(FetchError::Decode(reason)) => {
            return Err(PkgSizeError::RankingMalformed {
                url: url.to_string(),
                reason,
            })
        }
    };

    info!(
        "Fetched ranking of {} packages (last update: {})",
        ranking.len(),
        ranking.last_update.as_deref().unwrap_or("unknown")
    );
    Ok(ranking)
}
