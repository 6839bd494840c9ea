mod cache;
mod feed;
mod source;
mod util;

pub use cache::{CacheEntry, RecentCache};
pub use feed::RecentFeed;
pub use source::TwitterSource;
