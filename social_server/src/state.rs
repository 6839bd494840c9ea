use social_twitter::RecentFeed;

#[derive(Debug, Clone)]
pub struct AppState {
    /// Recent tweets by search query, cached per freshness window
    pub twitter_recent: RecentFeed,
}
