// Recent posts of a social feed, as shown next to an asset.
// Posts are looked up by a free-form search query and kept fresh for a fixed window.

use async_trait::async_trait;
use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How long fetched posts are served without asking the community again.
pub const FRESHNESS_WINDOW_SECS: i64 = 2 * 60 * 60;

pub fn freshness_window() -> Duration {
    Duration::seconds(FRESHNESS_WINDOW_SECS)
}

// MARK: Traits

/// A community that can search its most recent posts.
#[async_trait]
pub trait RecentSource: Send + Sync {
    /// Fetch the most recent posts matching `query`, in the order the community returns them.
    /// Failures are always reported as upstream errors, no partial results are returned.
    async fn fetch_recent(&self, query: &str) -> Result<Vec<NormalizedItem>>;
}

// MARK: Views

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub username: String,
    pub display_name: String,
    pub profile_picture_url: Option<String>,
    pub profile_url: Option<String>,
}

/// A post flattened together with its author and preview photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedItem {
    pub id: String,
    pub text: String,
    /// Opaque creation time as reported by the community.
    pub created_at: String,
    pub author: Author,
    pub preview_image: Option<String>,
}
