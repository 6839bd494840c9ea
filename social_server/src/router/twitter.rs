use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use std::sync::Arc;

use social_core::NormalizedItem;

use crate::{error::Result, state::AppState};

pub fn twitter_router() -> Router<AppState> {
    Router::new()
        .route("/twitter/recent", get(get_recent))
        .route("/twitter/cache", get(get_cache))
}

#[derive(Debug, Clone, Deserialize)]
struct RecentParams {
    query: String,
}

async fn get_recent(
    State(app_state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> Result<Json<Arc<Vec<NormalizedItem>>>> {
    let items = app_state.twitter_recent.get_recent(&params.query).await?;
    Ok(Json(items))
}

async fn get_cache(State(app_state): State<AppState>) -> Json<Value> {
    let entries = app_state.twitter_recent.cache().len().await;
    Json(json!({ "entries": entries }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::app;
    use async_trait::async_trait;
    use social_core::{Author, Error, RecentSource};
    use social_twitter::{RecentCache, RecentFeed};

    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecentSource for FakeSource {
        async fn fetch_recent(&self, query: &str) -> social_core::Result<Vec<NormalizedItem>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if query == "down" {
                return Err(Error::upstream(anyhow::anyhow!("service unavailable")));
            }
            Ok(vec![NormalizedItem {
                id: "1".to_string(),
                text: "gm".to_string(),
                created_at: "2023-11-02T09:00:00.000Z".to_string(),
                author: Author {
                    username: "alice".to_string(),
                    display_name: "Alice".to_string(),
                    profile_picture_url: None,
                    profile_url: None,
                },
                preview_image: None,
            }])
        }
    }

    async fn serve() -> (String, Arc<FakeSource>) {
        let source = Arc::new(FakeSource::default());
        let app_state = AppState {
            twitter_recent: RecentFeed::new(source.clone(), Arc::new(RecentCache::new())),
        };
        let server = axum::Server::bind(&"127.0.0.1:0".parse().unwrap()).serve(app(app_state).into_make_service());
        let addr = server.local_addr();
        tokio::spawn(server);
        (format!("http://{}", addr), source)
    }

    #[tokio::test]
    async fn test_get_recent() {
        let (base_url, source) = serve().await;
        let client = reqwest::Client::new();

        for _ in 0..2 {
            let response = client
                .get(format!("{}/twitter/recent", base_url))
                .query(&[("query", "osmosis")])
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), reqwest::StatusCode::OK);
            let body: Value = response.json().await.unwrap();
            assert_eq!(
                body,
                json!([{
                    "id": "1",
                    "text": "gm",
                    "createdAt": "2023-11-02T09:00:00.000Z",
                    "author": {
                        "username": "alice",
                        "displayName": "Alice",
                        "profilePictureUrl": null,
                        "profileUrl": null
                    },
                    "previewImage": null
                }])
            );
        }
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        let body: Value = client
            .get(format!("{}/twitter/cache", base_url))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body, json!({ "entries": 1 }));
    }

    #[tokio::test]
    async fn test_get_recent_shares_cached_items() {
        let source = Arc::new(FakeSource::default());
        let app_state = AppState {
            twitter_recent: RecentFeed::new(source.clone(), Arc::new(RecentCache::new())),
        };
        let params = || {
            Query(RecentParams {
                query: "osmosis".to_string(),
            })
        };

        let Json(first) = get_recent(State(app_state.clone()), params()).await.unwrap();
        let Json(second) = get_recent(State(app_state.clone()), params()).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);

        let body = serde_json::to_value(&second).unwrap();
        assert_eq!(body[0]["author"]["displayName"], "Alice");
    }

    #[tokio::test]
    async fn test_get_recent_upstream_failure() {
        let (base_url, _source) = serve().await;
        let response = reqwest::get(format!("{}/twitter/recent?query=down", base_url))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
        assert_eq!(response.text().await.unwrap(), "Upstream error: service unavailable");
    }

    #[tokio::test]
    async fn test_get_recent_requires_query() {
        let (base_url, source) = serve().await;
        let response = reqwest::get(format!("{}/twitter/recent", base_url)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}
