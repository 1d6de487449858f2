// src/infrastructure/repositories/postgres_registration.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::EventId;
use crate::domain::registration::{
    NewRegistration, PersonName, Registration, RegistrationEmail, RegistrationId,
    RegistrationRepository, RegistrationRuleViolation,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RegistrationRow {
    id: i64,
    event_id: i64,
    email: String,
    name: String,
    first_name: String,
    confirmed: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = DomainError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        let mut registration = NewRegistration::new(
            EventId::new(row.event_id)?,
            RegistrationEmail::new(row.email)?,
            PersonName::new(row.name)?,
            PersonName::new(row.first_name)?,
            row.created_at,
        )
        .into_registration(RegistrationId::new(row.id)?);
        if row.confirmed {
            registration.confirm();
        }
        Ok(registration)
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn find_by_event_and_email(
        &self,
        event_id: EventId,
        email: &RegistrationEmail,
    ) -> DomainResult<Option<Registration>> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            "SELECT id, event_id, email, name, first_name, confirmed, created_at
             FROM registrations WHERE event_id = $1 AND lower(email) = lower($2)",
        )
        .bind(i64::from(event_id))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Registration::try_from).transpose()
    }

    async fn count_by_event(&self, event_id: EventId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
            .bind(i64::from(event_id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    /// Serializes attempts per event by locking the event row, so the
    /// capacity recount and the insert see a stable registration count. The
    /// unique index on (event_id, lower(email)) catches duplicates.
    async fn insert(
        &self,
        registration: NewRegistration,
        limit: Option<u32>,
    ) -> DomainResult<Registration> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        let event_id = i64::from(registration.event_id());

        let locked: Option<i64> = sqlx::query_scalar("SELECT id FROM events WHERE id = $1 FOR UPDATE")
            .bind(event_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if locked.is_none() {
            return Err(DomainError::NotFound("event not found".into()));
        }

        if let Some(limit) = limit {
            let count: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM registrations WHERE event_id = $1")
                    .bind(event_id)
                    .fetch_one(&mut *tx)
                    .await
                    .map_err(map_sqlx)?;
            if count >= i64::from(limit) {
                tracing::debug!(event_id, count, limit, "registration limit reached in store");
                return Err(RegistrationRuleViolation::CapacityReached.into());
            }
        }

        let row = sqlx::query_as::<_, RegistrationRow>(
            "INSERT INTO registrations (event_id, email, name, first_name, confirmed, created_at)
             VALUES ($1, $2, $3, $4, FALSE, $5)
             RETURNING id, event_id, email, name, first_name, confirmed, created_at",
        )
        .bind(event_id)
        .bind(registration.email().as_str())
        .bind(registration.name().as_str())
        .bind(registration.first_name().as_str())
        .bind(registration.created_at())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;

        Registration::try_from(row)
    }
}
