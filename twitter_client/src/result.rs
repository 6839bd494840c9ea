use serde::{Deserialize, Serialize};

use std::collections::HashMap;

use crate::consts::PHOTO_MEDIA_TYPE;
use crate::error::Error;
use crate::response::{self, SearchResponse};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TweetUser {
    pub id: String,
    pub username: String,
    pub name: String,
    pub description: Option<String>,
    pub profile_image_url: Option<String>,
    pub url: Option<String>,
}

/// A tweet from recent search with its author and preview photo resolved.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecentTweet {
    pub id: String,
    pub text: String,
    /// Creation time exactly as reported by the API.
    pub created_at: String,
    pub user: TweetUser,
    pub preview_image: Option<String>,
}

// MARK: Conversions

impl From<&response::User> for TweetUser {
    fn from(user: &response::User) -> Self {
        TweetUser {
            id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            description: user.description.clone(),
            profile_image_url: user.profile_image_url.clone(),
            url: user.url.clone(),
        }
    }
}

/// Find the URL of the first attached photo, following the attachment order of the tweet.
fn preview_image(tweet: &response::Tweet, media: &HashMap<&str, &response::Media>) -> Option<String> {
    let attachments = tweet.attachments.as_ref()?;
    attachments.media_keys.iter().find_map(|key| {
        let m = media.get(key.as_str())?;
        if m.type_ != PHOTO_MEDIA_TYPE {
            return None;
        }
        m.url.clone()
    })
}

impl TryFrom<SearchResponse> for Vec<RecentTweet> {
    type Error = Error;

    fn try_from(value: SearchResponse) -> Result<Self, Self::Error> {
        let tweets = match value.data {
            Some(tweets) => tweets,
            None if !value.errors.is_empty() => {
                let message = value
                    .errors
                    .iter()
                    .map(|e| match &e.detail {
                        Some(detail) => format!("{}: {}", e.title, detail),
                        None => e.title.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(Error::ApiError(message));
            }
            // Nothing matched the query
            None if value.meta.as_ref().is_some_and(|m| m.result_count == 0) => return Ok(Vec::new()),
            None => return Err(Error::InvalidResponse("missing `data`".to_string())),
        };

        let users = value
            .includes
            .users
            .iter()
            .map(|u| (u.id.as_str(), u))
            .collect::<HashMap<_, _>>();
        let media = value
            .includes
            .media
            .iter()
            .map(|m| (m.media_key.as_str(), m))
            .collect::<HashMap<_, _>>();

        tweets
            .into_iter()
            .map(|tweet| {
                let Some(user) = users.get(tweet.author_id.as_str()) else {
                    return Err(Error::MissingAuthor {
                        tweet_id: tweet.id,
                        author_id: tweet.author_id,
                    });
                };
                let preview_image = preview_image(&tweet, &media);
                Ok(RecentTweet {
                    id: tweet.id,
                    text: tweet.text,
                    created_at: tweet.created_at,
                    user: TweetUser::from(*user),
                    preview_image,
                })
            })
            .collect()
    }
}
