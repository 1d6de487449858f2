use crate::domain::event::Event;
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EventDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub held_on: DateTime<FixedOffset>,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub needs_registration: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_limit: Option<u32>,
    pub created_at: DateTime<Utc>,
}

impl From<&Event> for EventDto {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id().into(),
            title: event.title().to_string(),
            description: event.description().to_string(),
            held_on: event.held_on(),
            duration_minutes: event.duration().minutes(),
            speaker: event.speaker().map(str::to_string),
            location: event.location().map(str::to_string),
            needs_registration: event.needs_registration(),
            registration_limit: event.registration_limit(),
            created_at: event.created_at(),
        }
    }
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}
