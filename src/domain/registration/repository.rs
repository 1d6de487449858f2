use crate::domain::errors::DomainResult;
use crate::domain::event::EventId;
use crate::domain::registration::{NewRegistration, Registration, RegistrationEmail};
use async_trait::async_trait;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn find_by_event_and_email(
        &self,
        event_id: EventId,
        email: &RegistrationEmail,
    ) -> DomainResult<Option<Registration>>;

    async fn count_by_event(&self, event_id: EventId) -> DomainResult<u64>;

    /// Stores the registration unless that would break a registration rule.
    ///
    /// Implementations must stay correct under concurrent attempts: a second
    /// registration for the same (event, email) fails with
    /// `DomainError::Registration(AlreadyRegistered)`, and exceeding `limit`
    /// fails with `DomainError::Registration(CapacityReached)`.
    async fn insert(
        &self,
        registration: NewRegistration,
        limit: Option<u32>,
    ) -> DomainResult<Registration>;
}
