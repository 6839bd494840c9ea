use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use social_core::{freshness_window, Clock, NormalizedItem, RecentSource, Result, SystemClock};

use crate::cache::RecentCache;

/// Recent posts by query, fetched from a source at most once per freshness window.
///
/// Concurrent calls for the same missing or stale query are not coalesced:
/// each one fetches on its own, and the last fetch to finish owns the entry.
#[derive(Clone)]
pub struct RecentFeed {
    source: Arc<dyn RecentSource>,
    cache: Arc<RecentCache>,
    clock: Arc<dyn Clock>,
}

impl RecentFeed {
    pub fn new(source: Arc<dyn RecentSource>, cache: Arc<RecentCache>) -> Self {
        Self {
            source,
            cache,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
        Self { clock, ..self }
    }

    pub fn cache(&self) -> &RecentCache {
        &self.cache
    }

    /// Get recent posts of `query`, served from cache while fresh.
    ///
    /// On a miss or a stale entry the source is asked again. If that fails the error is returned
    /// as is, and the cache keeps whatever it had before.
    pub async fn get_recent(&self, query: &str) -> Result<Arc<Vec<NormalizedItem>>> {
        // 1. Try the cache
        let now = self.clock.now();
        if let Some(items) = self.cache.fresh(query, now, freshness_window()).await {
            tracing::debug!("Serving {} cached posts for query `{}`", items.len(), query);
            return Ok(items);
        }

        // 2. Fetch from source, no lock is held while waiting
        let items = match self.source.fetch_recent(query).await {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!("Cannot fetch recent posts for query `{}`: {}", query, err);
                return Err(err);
            }
        };

        // 3. Store with the time the posts were fetched
        let fetched_at = self.clock.now();
        let count = items.len();
        let items = self.cache.store(query, items, fetched_at).await;
        tracing::info!("Stored {} posts for query `{}` to cache", count, query);
        Ok(items)
    }
}

impl Debug for RecentFeed {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentFeed").field("cache", &self.cache).finish_non_exhaustive()
    }
}
