// src/presentation/http/controllers/feeds.rs
use crate::application::queries::posts::ListPublishedPostsQuery;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::RequestLocale;
use crate::presentation::http::responses;
use crate::presentation::http::state::HttpState;
use crate::presentation::syndication::datetime::start_of_day_utc;
use axum::{
    Extension,
    extract::Query,
    http::HeaderMap,
    response::Response,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page: Option<u32>,
}

pub async fn calendar(
    Extension(state): Extension<HttpState>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let events = state
        .services
        .event_queries
        .upcoming_events()
        .await
        .into_http()?;

    let last_modified = events.iter().map(|event| event.created_at()).max();
    let document = state.calendar.render(&events);
    Ok(responses::document(&headers, document, last_modified))
}

pub async fn news_feed(
    Extension(state): Extension<HttpState>,
    RequestLocale(locale): RequestLocale,
    Query(params): Query<FeedParams>,
    headers: HeaderMap,
) -> HttpResult<Response> {
    let page = state
        .services
        .post_queries
        .published_page(ListPublishedPostsQuery {
            page: params.page.unwrap_or_default(),
        })
        .await
        .into_http()?;

    let last_modified = page.items.first().map(|post| start_of_day_utc(post.published_on()));
    let document = state.news_feed.render(&page, &locale);
    Ok(responses::document(&headers, document, last_modified))
}
