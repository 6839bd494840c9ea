use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid bearer token")]
    InvalidToken,
    #[error("Author `{author_id}` of tweet `{tweet_id}` is missing from response")]
    MissingAuthor { tweet_id: String, author_id: String },
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Cannot encode/decode JSON: {0}")]
    JSONError(#[from] serde_path_to_error::Error<serde_json::Error>),
    #[error("IO Error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Network Error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Cannot parse URL: {0}")]
    UrlError(#[from] url::ParseError),
}
