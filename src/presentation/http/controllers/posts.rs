// src/presentation/http/controllers/posts.rs
use crate::application::{dto::PostViewDto, queries::posts::GetPostByAddressQuery};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::responses::found;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    response::{IntoResponse, Response},
};

/// Raw path segments; numerals are parsed here so that garbage is treated
/// like an unknown post.
pub type PostPath = (String, String, String, String);

#[utoipa::path(
    get,
    path = "/{year}/{month}/{day}/{slug}",
    params(
        ("year" = i32, Path, description = "Publication year"),
        ("month" = u32, Path, description = "Publication month, unpadded"),
        ("day" = u32, Path, description = "Publication day, unpadded"),
        ("slug" = String, Path, description = "Post slug")
    ),
    responses(
        (status = 200, description = "The post with its neighbours.", body = PostViewDto),
        (status = 302, description = "Unknown post or impossible date; redirects to the index.")
    ),
    tag = "Site"
)]
pub async fn show_post(
    Extension(state): Extension<HttpState>,
    Path((year, month, day, slug)): Path<PostPath>,
) -> HttpResult<Response> {
    let (Ok(year), Ok(month), Ok(day)) = (
        year.parse::<i32>(),
        month.parse::<u32>(),
        day.parse::<u32>(),
    ) else {
        return Ok(found("/"));
    };

    let view = state
        .services
        .post_queries
        .get_post(GetPostByAddressQuery {
            year,
            month,
            day,
            slug,
        })
        .await
        .into_http()?;

    Ok(match view {
        Some(view) => Json(view).into_response(),
        None => found("/"),
    })
}
