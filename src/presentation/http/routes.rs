// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{feeds, posts, registrations, site},
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, routing::get};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/", get(site::index))
        .route("/archive", get(site::archive))
        .route("/events.ics", get(feeds::calendar))
        .route("/feed.rss", get(feeds::news_feed))
        .route(
            "/register/{event_id}",
            get(registrations::show_form).post(registrations::submit),
        )
        .route("/{year}/{month}/{day}/{slug}", get(posts::show_post))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
