use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use social_core::NormalizedItem;

/// Posts fetched for one query, stamped with the time they were fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub items: Arc<Vec<NormalizedItem>>,
    pub last_updated: DateTime<Utc>,
}

impl CacheEntry {
    pub fn is_fresh(&self, now: DateTime<Utc>, window: Duration) -> bool {
        now.signed_duration_since(self.last_updated) <= window
    }
}

/// Recent posts by search query.
/// Entries are only ever replaced by a successful fetch; nothing expires by itself.
#[derive(Debug, Default)]
pub struct RecentCache {
    /// query -> CacheEntry
    entries: RwLock<HashMap<String, CacheEntry>>,
    /// Maximum number of queries kept, unbounded if `None`
    capacity: Option<NonZeroUsize>,
}

impl RecentCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: None,
        }
    }

    /// Keep at most `capacity` queries. When a new query arrives at a full cache,
    /// the least recently fetched query is dropped.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity: Some(capacity),
        }
    }

    /// Get the posts of `query` if they were fetched no longer than `window` before `now`.
    pub async fn fresh(&self, query: &str, now: DateTime<Utc>, window: Duration) -> Option<Arc<Vec<NormalizedItem>>> {
        let entries = self.entries.read().await;
        entries
            .get(query)
            .filter(|entry| entry.is_fresh(now, window))
            .map(|entry| entry.items.clone())
    }

    /// Store freshly fetched posts of `query`, replacing any previous entry as a whole.
    pub async fn store(
        &self,
        query: &str,
        items: Vec<NormalizedItem>,
        fetched_at: DateTime<Utc>,
    ) -> Arc<Vec<NormalizedItem>> {
        let items = Arc::new(items);
        let mut entries = self.entries.write().await;

        if let Some(capacity) = self.capacity {
            if !entries.contains_key(query) && entries.len() >= capacity.get() {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.last_updated)
                    .map(|(key, _)| key.clone());
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                    tracing::debug!("Evicted query `{}` from recent cache", oldest);
                }
            }
        }

        entries.insert(
            query.to_string(),
            CacheEntry {
                items: items.clone(),
                last_updated: fetched_at,
            },
        );
        items
    }

    pub async fn entry(&self, query: &str) -> Option<CacheEntry> {
        self.entries.read().await.get(query).cloned()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
