//! Shared application state for the web server.

use std::sync::Arc;
use std::time::Duration;

use podium_common::cache::TtlCache;
use podium_common::{AppConfig, Result};
use podium_ingestion::SheetClient;
use podium_ranker::pipeline::{self, Snapshot};
use tokio::sync::Mutex;
use tracing::warn;

/// State injected into every Axum handler.
pub struct AppState {
    pub config: AppConfig,
    client: SheetClient,
    csv_url: String,
    cache: Mutex<TtlCache<Snapshot>>,
}

pub type SharedState = Arc<AppState>;

/// What a load produced: always a structurally valid snapshot, plus the
/// failure cause whenever the placeholder board was substituted.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub snapshot: Snapshot,
    pub error: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = SheetClient::new(Duration::from_secs(config.sheet.timeout_secs))?;
        let csv_url = SheetClient::csv_export_url(&config.sheet.sheet_id);
        let cache = Mutex::new(TtlCache::with_ttl_secs(config.sheet.cache_ttl_secs));
        Ok(Self {
            config,
            client,
            csv_url,
            cache,
        })
    }

    /// Load the current snapshot through the cache.
    ///
    /// The cache lock is held across the fetch, so concurrent requests for
    /// the same source within the validity window observe one cached result
    /// and never duplicate the network call. `force` drops the cached entry
    /// before the lookup (the manual refresh path).
    pub async fn load(&self, force: bool) -> LoadOutcome {
        let mut cache = self.cache.lock().await;
        if force {
            cache.invalidate(&self.csv_url);
        }
        if let Some(snapshot) = cache.get(&self.csv_url) {
            return LoadOutcome {
                snapshot: snapshot.clone(),
                error: None,
            };
        }

        match pipeline::load(&self.client, &self.csv_url).await {
            Ok(snapshot) => {
                cache.insert(&self.csv_url, snapshot.clone());
                LoadOutcome {
                    snapshot,
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Sheet load failed, serving placeholder board");
                LoadOutcome {
                    snapshot: pipeline::fallback(),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// State pointed at a port nothing listens on, so the fetch fails fast.
    fn unreachable_state() -> AppState {
        let config = AppConfig::default();
        let client = SheetClient::new(Duration::from_secs(2)).unwrap();
        AppState {
            csv_url: "http://127.0.0.1:9/export?format=csv".to_string(),
            cache: Mutex::new(TtlCache::with_ttl_secs(config.sheet.cache_ttl_secs)),
            config,
            client,
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_placeholder() {
        let state = unreachable_state();
        let outcome = state.load(false).await;

        // Failure is surfaced, not swallowed, and the board stays usable.
        assert!(outcome.error.is_some());
        assert_eq!(outcome.snapshot.board.rows.len(), 8);
        assert_eq!(outcome.snapshot.board.rows[0].name, "Team_1");
        assert_eq!(outcome.snapshot.summary.leader, "TBD");
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let state = unreachable_state();
        let first = state.load(false).await;
        let second = state.load(false).await;
        // Both attempts hit the (unreachable) source rather than a cached
        // placeholder.
        assert!(first.error.is_some());
        assert!(second.error.is_some());
    }
}
