// src/domain/event/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::event::value_objects::{EventDuration, EventId, EventTitle};
use chrono::{DateTime, FixedOffset, Utc};

/// A scheduled community event.
///
/// Identity and start are fixed at construction; there is no setter for
/// either. Use [`Event::builder`] to create one.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    id: EventId,
    title: EventTitle,
    description: String,
    held_on: DateTime<FixedOffset>,
    duration: EventDuration,
    speaker: Option<String>,
    location: Option<String>,
    needs_registration: bool,
    registration_limit: Option<u32>,
    created_at: DateTime<Utc>,
}

impl Event {
    pub fn builder(
        id: EventId,
        held_on: DateTime<FixedOffset>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> EventBuilder {
        EventBuilder {
            id,
            held_on,
            title: title.into(),
            description: description.into(),
            duration: EventDuration::default(),
            speaker: None,
            location: None,
            needs_registration: true,
            registration_limit: None,
            created_at: None,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &EventTitle {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn held_on(&self) -> DateTime<FixedOffset> {
        self.held_on
    }

    pub fn duration(&self) -> EventDuration {
        self.duration
    }

    pub fn ends_at(&self) -> DateTime<FixedOffset> {
        self.held_on + self.duration.as_chrono()
    }

    pub fn speaker(&self) -> Option<&str> {
        self.speaker.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn needs_registration(&self) -> bool {
        self.needs_registration
    }

    pub fn registration_limit(&self) -> Option<u32> {
        self.registration_limit
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Registration is possible only for events that ask for it and have not
    /// started yet.
    pub fn is_open_for_registration(&self, now: DateTime<Utc>) -> bool {
        self.needs_registration && self.held_on > now
    }
}

pub struct EventBuilder {
    id: EventId,
    held_on: DateTime<FixedOffset>,
    title: String,
    description: String,
    duration: EventDuration,
    speaker: Option<String>,
    location: Option<String>,
    needs_registration: bool,
    registration_limit: Option<u32>,
    created_at: Option<DateTime<Utc>>,
}

impl EventBuilder {
    pub fn duration(mut self, duration: EventDuration) -> Self {
        self.duration = duration;
        self
    }

    pub fn speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn needs_registration(mut self, needs_registration: bool) -> Self {
        self.needs_registration = needs_registration;
        self
    }

    pub fn registration_limit(mut self, limit: u32) -> Self {
        self.registration_limit = Some(limit);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Blank speaker and location values are stored as absent. `created_at`
    /// defaults to the start instant.
    pub fn build(self) -> DomainResult<Event> {
        let title = EventTitle::new(self.title)?;
        let created_at = self
            .created_at
            .unwrap_or_else(|| self.held_on.with_timezone(&Utc));

        Ok(Event {
            id: self.id,
            title,
            description: self.description,
            held_on: self.held_on,
            duration: self.duration,
            speaker: self.speaker.filter(|s| !s.trim().is_empty()),
            location: self.location.filter(|l| !l.trim().is_empty()),
            needs_registration: self.needs_registration,
            registration_limit: self.registration_limit,
            created_at,
        })
    }
}
