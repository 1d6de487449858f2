pub mod calendar;
pub mod datetime;
pub mod news_feed;

pub use calendar::{CalendarFeedRenderer, CalendarSettings};
pub use news_feed::{FeedSettings, NewsFeedRenderer};

/// A rendered export together with its media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyndicationDocument {
    pub content_type: &'static str,
    pub body: String,
}
