use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

// Media

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Media {
    pub media_key: String,
    #[serde(rename = "type")]
    pub type_: String,
    /// Only photos carry a direct URL, videos and GIFs don't.
    pub url: Option<String>,
}

// User

#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub description: Option<String>,
    pub profile_image_url: Option<String>,
    /// Users without a website are reported with an empty string.
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub url: Option<String>,
}

// Tweet

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Attachments {
    #[serde(default)]
    pub media_keys: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Tweet {
    pub id: String,
    pub text: String,
    pub created_at: String,
    pub author_id: String,
    pub attachments: Option<Attachments>,
}

// Search

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Includes {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub media: Vec<Media>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Meta {
    pub result_count: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApiError {
    pub title: String,
    pub detail: Option<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SearchResponse {
    pub data: Option<Vec<Tweet>>,
    #[serde(default)]
    pub includes: Includes,
    pub meta: Option<Meta>,
    #[serde(default)]
    pub errors: Vec<ApiError>,
}
