use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(i64);

impl EventId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("event id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<EventId> for i64 {
    fn from(value: EventId) -> Self {
        value.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventTitle(String);

impl EventTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("event title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length of an event in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDuration(u32);

impl EventDuration {
    pub const DEFAULT_MINUTES: u32 = 120;

    pub fn from_minutes(minutes: i64) -> DomainResult<Self> {
        u32::try_from(minutes)
            .ok()
            .filter(|m| *m > 0)
            .map(Self)
            .ok_or_else(|| DomainError::Validation("event duration must be positive".into()))
    }

    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn as_chrono(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }
}

impl Default for EventDuration {
    fn default() -> Self {
        Self(Self::DEFAULT_MINUTES)
    }
}
