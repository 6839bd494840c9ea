pub mod twitter;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .merge(twitter::twitter_router())
        .layer(TraceLayer::new_for_http().on_request(()))
        .with_state(app_state)
}
