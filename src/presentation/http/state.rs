// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::domain::locale::Locale;
use crate::presentation::syndication::{CalendarFeedRenderer, NewsFeedRenderer};
use cookie::Key;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub calendar: Arc<CalendarFeedRenderer>,
    pub news_feed: Arc<NewsFeedRenderer>,
    /// Used when a request names no acceptable language.
    pub default_locale: Locale,
    /// Signs the registration flash cookie.
    pub flash_key: Key,
}
