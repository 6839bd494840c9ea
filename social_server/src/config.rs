use anyhow::Context;

use std::net::SocketAddr;
use std::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub struct Config {
    pub twitter_api_url: String,
    pub twitter_access_token: String,
    pub server_address: SocketAddr,
    /// Maximum number of cached queries, unbounded if not set
    pub cache_capacity: Option<NonZeroUsize>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Config> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let twitter_api_url = lookup("TWITTER_API_URL").unwrap_or_else(|| twitter_client::DEFAULT_API_URL.to_string());
        let twitter_access_token = lookup("TWITTER_API_ACCESS_TOKEN").context("TWITTER_API_ACCESS_TOKEN must be set")?;
        let server_address = lookup("SERVER_ADDRESS")
            .context("SERVER_ADDRESS must be set")?
            .parse::<SocketAddr>()
            .context("SERVER_ADDRESS must be a socket address")?;
        let cache_capacity = lookup("RECENT_CACHE_CAPACITY")
            .map(|s| s.parse::<NonZeroUsize>())
            .transpose()
            .context("RECENT_CACHE_CAPACITY must be a positive integer")?;

        Ok(Config {
            twitter_api_url,
            twitter_access_token,
            server_address,
            cache_capacity,
        })
    }
}
