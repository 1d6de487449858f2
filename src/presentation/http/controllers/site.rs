// src/presentation/http/controllers/site.rs
use crate::application::{
    dto::{EventDto, Page, PostSummaryDto},
    queries::{links::GroupedLinks, posts::ListPublishedPostsQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub upcoming_events: Vec<EventDto>,
    #[schema(value_type = Object)]
    pub posts: Page<PostSummaryDto>,
    /// Sidebar links grouped by type.
    #[schema(value_type = Object)]
    pub links: GroupedLinks,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Upcoming events, the newest posts and the sidebar links.", body = IndexResponse)
    ),
    tag = "Site"
)]
pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Json<IndexResponse>> {
    let events = state
        .services
        .event_queries
        .upcoming_events()
        .await
        .into_http()?;
    let posts = state
        .services
        .post_queries
        .published_page(ListPublishedPostsQuery { page: 0 })
        .await
        .into_http()?;
    let links = state
        .services
        .link_queries
        .grouped_links()
        .await
        .into_http()?;

    Ok(Json(IndexResponse {
        upcoming_events: events.iter().map(EventDto::from).collect(),
        posts: posts.map(|post| PostSummaryDto::from(&post)),
        links,
    }))
}

#[utoipa::path(
    get,
    path = "/archive",
    responses(
        (status = 200, description = "Every published post, newest first.", body = [PostSummaryDto])
    ),
    tag = "Site"
)]
pub async fn archive(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<PostSummaryDto>>> {
    state
        .services
        .post_queries
        .archive()
        .await
        .into_http()
        .map(Json)
}
