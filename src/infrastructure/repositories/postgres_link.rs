// src/infrastructure/repositories/postgres_link.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::link::{Link, LinkId, LinkRepository, LinkTitle};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresLinkRepository {
    pool: PgPool,
}

impl PostgresLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct LinkRow {
    id: i64,
    #[sqlx(rename = "type")]
    link_type: String,
    sort_col: i32,
    title: String,
    url: String,
}

impl TryFrom<LinkRow> for Link {
    type Error = DomainError;

    fn try_from(row: LinkRow) -> Result<Self, Self::Error> {
        Ok(Link::new(LinkId::new(row.id)?, &row.url, LinkTitle::new(row.title)?)?
            .with_type(row.link_type.parse()?)
            .sorted_at(row.sort_col))
    }
}

#[async_trait]
impl LinkRepository for PostgresLinkRepository {
    async fn list_ordered(&self) -> DomainResult<Vec<Link>> {
        let rows = sqlx::query_as::<_, LinkRow>(
            "SELECT id, type, sort_col, title, url FROM links ORDER BY type, sort_col, title",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Link::try_from).collect()
    }
}
