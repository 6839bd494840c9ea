mod consts;
mod error;
mod response;
mod result;

use reqwest::{header, Client, Response, Url};

pub use consts::DEFAULT_API_URL;
use consts::*;
use response::SearchResponse;
pub use result::*;

pub use crate::error::Error;
use crate::error::Result;

/// Client for the v2 search API, authenticated with an app-only bearer token.
#[derive(Debug, Clone)]
pub struct TwitterClient {
    base_url: String,
    client: reqwest::Client,
}

impl TwitterClient {
    pub fn new(base_url: &str, bearer_token: &str) -> Result<TwitterClient> {
        let mut authorization =
            header::HeaderValue::from_str(&format!("Bearer {}", bearer_token)).map_err(|_| Error::InvalidToken)?;
        authorization.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(TwitterClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Search tweets from the last seven days matching `query`, newest first.
    /// Each tweet comes with its author and the URL of its first attached photo resolved.
    pub async fn search_recent(&self, query: &str) -> Result<Vec<RecentTweet>> {
        let max_results = SEARCH_API_MAX_COUNT.to_string();
        let mut params = vec![("query", query), ("max_results", max_results.as_str())];
        params.extend(SEARCH_PARAMS.iter().copied());

        let response: SearchResponse = self.rest_get(SEARCH_RECENT_PATH, &params).await?;
        response.try_into()
    }
}

impl TwitterClient {
    async fn rest_get<R>(&self, path: &str, params: &[(&str, &str)]) -> Result<R>
    where
        R: serde::de::DeserializeOwned,
    {
        let url = Url::parse_with_params(&format!("{}{}", self.base_url, path), params)?;
        let response: Response = self.client.get(url).send().await?;

        let status_error = response.error_for_status_ref().err();
        let content = response.text().await?;
        let name = path.strip_prefix('/').unwrap_or(path).replace('/', "_");
        log(&name, &content).await?;
        if let Some(status_error) = status_error {
            tracing::debug!("Request to {} failed: {}", path, content);
            return Err(status_error.into());
        }

        parse_json(&content)
    }
}

/// Deserialize a response body, reporting the path of the offending field on failure.
pub(crate) fn parse_json<R>(content: &str) -> Result<R>
where
    R: serde::de::DeserializeOwned,
{
    let deserializer = &mut serde_json::Deserializer::from_str(content);
    serde_path_to_error::deserialize(deserializer).map_err(|e| e.into())
}

async fn log(name: &str, content: &str) -> Result<()> {
    if let Ok(dir) = std::env::var("CLIENT_LOG_DIR") {
        write_log(std::path::Path::new(&dir), name, content).await?;
    }
    Ok(())
}

/// Dump a raw response body into `dir`. Never overwrites an earlier dump.
pub(crate) async fn write_log(dir: &std::path::Path, name: &str, content: &str) -> Result<std::path::PathBuf> {
    use tokio::{fs::OpenOptions, io::AsyncWriteExt};

    let time = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
    let mut attempt = 0;
    loop {
        let filename = match attempt {
            0 => format!("twitter_{}_{}.json", name, time),
            n => format!("twitter_{}_{}_{}.json", name, time, n),
        };
        let filepath = dir.join(filename);
        match OpenOptions::new().write(true).create_new(true).open(&filepath).await {
            Ok(mut file) => {
                file.write_all(content.as_bytes()).await?;
                return Ok(filepath);
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
