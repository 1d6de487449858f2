use crate::domain::post::Post;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing entry: everything but the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostSummaryDto {
    pub title: String,
    pub slug: String,
    pub published_on: NaiveDate,
    /// Site-relative path, e.g. `/2016/8/4/bar`.
    pub path: String,
}

impl From<&Post> for PostSummaryDto {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title().to_string(),
            slug: post.slug().to_string(),
            published_on: post.published_on(),
            path: format!("/{}", post.address().path()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub title: String,
    pub slug: String,
    pub published_on: NaiveDate,
    pub path: String,
    /// Rendered HTML body.
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl PostDto {
    pub fn from_post(post: &Post, rendered_content: String) -> Self {
        Self {
            title: post.title().to_string(),
            slug: post.slug().to_string(),
            published_on: post.published_on(),
            path: format!("/{}", post.address().path()),
            content: rendered_content,
            created_at: post.created_at(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PostViewDto {
    pub post: PostDto,
    pub previous_post: Option<PostSummaryDto>,
    pub next_post: Option<PostSummaryDto>,
}
