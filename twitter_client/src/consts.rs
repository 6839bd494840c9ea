pub const DEFAULT_API_URL: &str = "https://api.twitter.com/2";
pub const SEARCH_RECENT_PATH: &str = "/tweets/search/recent";

pub const SEARCH_API_MAX_COUNT: u32 = 10;

/// Field selection and expansions sent with every recent search.
/// Authors and attached media are expanded so that each page can be resolved without extra requests.
pub const SEARCH_PARAMS: &[(&str, &str)] = &[
    ("tweet.fields", "created_at"),
    ("expansions", "author_id,attachments.media_keys"),
    ("media.fields", "media_key,type,url"),
    ("user.fields", "description,profile_image_url,url"),
];

pub const PHOTO_MEDIA_TYPE: &str = "photo";
