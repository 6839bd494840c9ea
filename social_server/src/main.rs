mod config;
mod error;
mod router;
mod state;

use dotenvy::dotenv;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use std::sync::Arc;

use social_twitter::{RecentCache, RecentFeed, TwitterSource};
use twitter_client::TwitterClient;

use crate::{config::Config, state::AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Initialize logger
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()
        .unwrap()
        .add_directive("hyper::proto=info".parse().unwrap())
        .add_directive("hyper::client=info".parse().unwrap())
        .add_directive("reqwest=info".parse().unwrap());
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();

    // 2. Load configuration
    let config = Config::from_env().expect("invalid configuration");

    // 3. Initialize API client
    let client = TwitterClient::new(&config.twitter_api_url, &config.twitter_access_token)
        .expect("TWITTER_API_ACCESS_TOKEN must be a valid header value");

    // 4. Initialize cache
    let cache = match config.cache_capacity {
        Some(capacity) => RecentCache::with_capacity(capacity),
        None => RecentCache::new(),
    };
    let twitter_recent = RecentFeed::new(Arc::new(TwitterSource::new(client)), Arc::new(cache));

    // 5. Setup state and router
    let app_state = AppState { twitter_recent };
    let app = router::app(app_state);

    // 6. Start server
    tracing::info!("Server starting at {}", config.server_address);
    axum::Server::bind(&config.server_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
