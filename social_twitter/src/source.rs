use async_trait::async_trait;

use social_core::{Error, NormalizedItem, RecentSource, Result};
use twitter_client::TwitterClient;

use crate::util;

/// Recent tweets from the v2 search API.
#[derive(Debug, Clone)]
pub struct TwitterSource {
    client: TwitterClient,
}

impl TwitterSource {
    pub fn new(client: TwitterClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecentSource for TwitterSource {
    async fn fetch_recent(&self, query: &str) -> Result<Vec<NormalizedItem>> {
        let tweets = self.client.search_recent(query).await.map_err(Error::upstream)?;
        tracing::info!("Fetched {} recent tweets for query `{}`", tweets.len(), query);
        Ok(tweets.iter().map(util::item_view).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transport_failure_is_upstream() {
        // Nothing listens on port 1
        let client = TwitterClient::new("http://127.0.0.1:1/2", "token").unwrap();
        let source = TwitterSource::new(client);

        let Err(Error::Upstream(err)) = source.fetch_recent("osmosis").await else {
            panic!("expected upstream error");
        };
        assert!(matches!(
            err.downcast_ref::<twitter_client::Error>(),
            Some(twitter_client::Error::NetworkError(_))
        ));
    }
}
