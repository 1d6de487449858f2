// src/domain/registration/entity.rs
use crate::domain::event::EventId;
use crate::domain::registration::value_objects::{PersonName, RegistrationEmail, RegistrationId};
use chrono::{DateTime, Utc};

/// A stored registration. Only the store hands these out, via
/// [`NewRegistration::into_registration`].
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    id: RegistrationId,
    event_id: EventId,
    email: RegistrationEmail,
    name: PersonName,
    first_name: PersonName,
    confirmed: bool,
    created_at: DateTime<Utc>,
}

impl Registration {
    pub fn id(&self) -> RegistrationId {
        self.id
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn email(&self) -> &RegistrationEmail {
        &self.email
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn confirm(&mut self) {
        self.confirmed = true;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    event_id: EventId,
    email: RegistrationEmail,
    name: PersonName,
    first_name: PersonName,
    created_at: DateTime<Utc>,
}

impl NewRegistration {
    pub fn new(
        event_id: EventId,
        email: RegistrationEmail,
        name: PersonName,
        first_name: PersonName,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            event_id,
            email,
            name,
            first_name,
            created_at,
        }
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn email(&self) -> &RegistrationEmail {
        &self.email
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn first_name(&self) -> &PersonName {
        &self.first_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// New registrations always start unconfirmed.
    pub fn into_registration(self, id: RegistrationId) -> Registration {
        Registration {
            id,
            event_id: self.event_id,
            email: self.email,
            name: self.name,
            first_name: self.first_name,
            confirmed: false,
            created_at: self.created_at,
        }
    }
}
