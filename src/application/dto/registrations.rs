use crate::domain::registration::Registration;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegistrationDto {
    pub id: i64,
    pub event_id: i64,
    pub email: String,
    pub name: String,
    pub first_name: String,
    pub confirmed: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Registration> for RegistrationDto {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.id().into(),
            event_id: registration.event_id().into(),
            email: registration.email().to_string(),
            name: registration.name().to_string(),
            first_name: registration.first_name().to_string(),
            confirmed: registration.is_confirmed(),
            created_at: registration.created_at(),
        }
    }
}
