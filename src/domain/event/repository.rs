use crate::domain::errors::DomainResult;
use crate::domain::event::{Event, EventId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>>;
    /// Events starting at or after `now`, ascending by start.
    async fn find_upcoming(&self, now: DateTime<Utc>) -> DomainResult<Vec<Event>>;
}
