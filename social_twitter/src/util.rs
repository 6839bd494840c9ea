use social_core::{Author, NormalizedItem};

use twitter_client as client;

pub(crate) fn author_view(user: &client::TweetUser) -> Author {
    Author {
        username: user.username.clone(),
        display_name: user.name.clone(),
        profile_picture_url: user.profile_image_url.clone(),
        profile_url: user.url.clone(),
    }
}

pub(crate) fn item_view(tweet: &client::RecentTweet) -> NormalizedItem {
    NormalizedItem {
        id: tweet.id.clone(),
        text: tweet.text.clone(),
        created_at: tweet.created_at.clone(),
        author: author_view(&tweet.user),
        preview_image: tweet.preview_image.clone(),
    }
}

#[cfg(test)]
pub(crate) fn test_item(id: &str) -> NormalizedItem {
    NormalizedItem {
        id: id.to_string(),
        text: format!("tweet {}", id),
        created_at: "2023-11-02T09:00:00.000Z".to_string(),
        author: Author {
            username: "alice".to_string(),
            display_name: "Alice".to_string(),
            profile_picture_url: None,
            profile_url: None,
        },
        preview_image: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_view() {
        let tweet = client::RecentTweet {
            id: "1".to_string(),
            text: "gm".to_string(),
            created_at: "2023-11-02T09:00:00.000Z".to_string(),
            user: client::TweetUser {
                id: "u1".to_string(),
                username: "alice".to_string(),
                name: "Alice".to_string(),
                description: None,
                profile_image_url: None,
                url: None,
            },
            preview_image: None,
        };

        let item = item_view(&tweet);
        assert_eq!(
            item,
            NormalizedItem {
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
            }
        );
    }

    #[test]
    fn test_item_view_keeps_links() {
        let tweet = client::RecentTweet {
            id: "2".to_string(),
            text: "New pools".to_string(),
            created_at: "2023-11-02T10:15:00.000Z".to_string(),
            user: client::TweetUser {
                id: "u2".to_string(),
                username: "osmosiszone".to_string(),
                name: "Osmosis".to_string(),
                description: Some("DEX".to_string()),
                profile_image_url: Some("https://pbs.twimg.com/profile_images/osmosis_normal.jpg".to_string()),
                url: Some("https://t.co/osmosis".to_string()),
            },
            preview_image: Some("https://pbs.twimg.com/media/first.jpg".to_string()),
        };

        let item = item_view(&tweet);
        assert_eq!(item.author.display_name, "Osmosis");
        assert_eq!(
            item.author.profile_picture_url.as_deref(),
            Some("https://pbs.twimg.com/profile_images/osmosis_normal.jpg")
        );
        assert_eq!(item.author.profile_url.as_deref(), Some("https://t.co/osmosis"));
        assert_eq!(item.preview_image.as_deref(), Some("https://pbs.twimg.com/media/first.jpg"));
    }
}
