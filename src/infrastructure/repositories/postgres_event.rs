// src/infrastructure/repositories/postgres_event.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{Event, EventDuration, EventId, EventRepository};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, Utc};
use sqlx::{FromRow, PgPool};

const EVENT_COLUMNS: &str = "id, title, description, held_on, utc_offset_seconds, duration_minutes, \
     speaker, location, needs_registration, registration_limit, created_at";

#[derive(Clone)]
pub struct PostgresEventRepository {
    pool: PgPool,
}

impl PostgresEventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    title: String,
    description: String,
    held_on: DateTime<Utc>,
    utc_offset_seconds: i32,
    duration_minutes: Option<i32>,
    speaker: Option<String>,
    location: Option<String>,
    needs_registration: bool,
    registration_limit: Option<i32>,
    created_at: DateTime<Utc>,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let offset = FixedOffset::east_opt(row.utc_offset_seconds).ok_or_else(|| {
            DomainError::Persistence(format!(
                "event {} has an invalid utc offset {}",
                row.id, row.utc_offset_seconds
            ))
        })?;

        let mut builder = Event::builder(
            EventId::new(row.id)?,
            row.held_on.with_timezone(&offset),
            row.title,
            row.description,
        )
        .needs_registration(row.needs_registration)
        .created_at(row.created_at);

        if let Some(minutes) = row.duration_minutes {
            builder = builder.duration(EventDuration::from_minutes(i64::from(minutes))?);
        }
        if let Some(speaker) = row.speaker {
            builder = builder.speaker(speaker);
        }
        if let Some(location) = row.location {
            builder = builder.location(location);
        }
        if let Some(limit) = row.registration_limit {
            let limit = u32::try_from(limit).map_err(|_| {
                DomainError::Persistence(format!("event {} has a negative registration limit", row.id))
            })?;
            builder = builder.registration_limit(limit);
        }

        builder.build()
    }
}

#[async_trait]
impl EventRepository for PostgresEventRepository {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Event::try_from).transpose()
    }

    async fn find_upcoming(&self, now: DateTime<Utc>) -> DomainResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE held_on >= $1 ORDER BY held_on ASC, id ASC"
        ))
        .bind(now)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Event::try_from).collect()
    }
}
