// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    Post, PostAddress, PostFormat, PostId, PostRepository, PostSlug, PostTitle,
};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

const POST_COLUMNS: &str = "id, published_on, slug, title, content, format, status, created_at";

#[derive(Clone)]
pub struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    published_on: NaiveDate,
    slug: String,
    title: String,
    content: String,
    format: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post::builder(
            PostId::new(row.id)?,
            row.published_on,
            PostSlug::new(row.slug)?,
            PostTitle::new(row.title)?,
        )
        .content(row.content)
        .format(row.format.parse::<PostFormat>()?)
        .status(row.status.parse()?)
        .created_at(row.created_at)
        .build())
    }
}

fn into_posts(rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
    rows.into_iter().map(Post::try_from).collect()
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_published_page(&self, offset: u64, limit: u32) -> DomainResult<(Vec<Post>, u64)> {
        let offset = i64::try_from(offset)
            .map_err(|_| DomainError::Validation("page offset out of range".into()))?;

        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE status = 'published' \
             ORDER BY published_on DESC, created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM posts WHERE status = 'published'")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok((into_posts(rows)?, u64::try_from(total).unwrap_or_default()))
    }

    async fn find_published_by_address(&self, address: &PostAddress) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE status = 'published' AND published_on = $1 AND slug = $2"
        ))
        .bind(address.published_on)
        .bind(address.slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_previous(&self, post: &Post) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE status = 'published' AND (published_on, created_at, id) < ($1, $2, $3) \
             ORDER BY published_on DESC, created_at DESC, id DESC LIMIT 1"
        ))
        .bind(post.published_on())
        .bind(post.created_at())
        .bind(i64::from(post.id()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_next(&self, post: &Post) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE status = 'published' AND (published_on, created_at, id) > ($1, $2, $3) \
             ORDER BY published_on ASC, created_at ASC, id ASC LIMIT 1"
        ))
        .bind(post.published_on())
        .bind(post.created_at())
        .bind(i64::from(post.id()))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list_published(&self) -> DomainResult<Vec<Post>> {
        let rows = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE status = 'published' \
             ORDER BY published_on DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_posts(rows)
    }
}
