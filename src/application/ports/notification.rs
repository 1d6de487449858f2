// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use crate::domain::{event::Event, locale::Locale, registration::Registration};
use async_trait::async_trait;

#[async_trait]
pub trait ConfirmationNotifier: Send + Sync {
    /// Hand a confirmation for `registration` to the outbound channel.
    /// Implementations must not wait for delivery.
    async fn send_confirmation(
        &self,
        registration: &Registration,
        event: &Event,
        locale: &Locale,
    ) -> ApplicationResult<()>;
}
