// src/infrastructure/notification/mod.rs
mod mail;
mod transport;

pub use mail::{OutgoingMail, compose_confirmation};
pub use transport::{LoggingMailTransport, MailTransport, TransportError};

use std::sync::Arc;

use crate::{
    application::{ApplicationResult, ports::notification::ConfirmationNotifier},
    domain::{event::Event, locale::Locale, registration::Registration},
};
use async_trait::async_trait;

/// Sends confirmations by mail without waiting for delivery.
///
/// The composed mail is handed to a spawned task; transport failures are
/// logged there and never reach the caller.
#[derive(Clone)]
pub struct MailConfirmationNotifier {
    from: String,
    transport: Arc<dyn MailTransport>,
}

impl MailConfirmationNotifier {
    pub fn new(from: impl Into<String>, transport: Arc<dyn MailTransport>) -> Self {
        Self {
            from: from.into(),
            transport,
        }
    }
}

#[async_trait]
impl ConfirmationNotifier for MailConfirmationNotifier {
    async fn send_confirmation(
        &self,
        registration: &Registration,
        event: &Event,
        locale: &Locale,
    ) -> ApplicationResult<()> {
        let mail = compose_confirmation(&self.from, registration, event, locale);
        let transport = Arc::clone(&self.transport);
        let registration_id = i64::from(registration.id());

        tokio::spawn(async move {
            if let Err(err) = transport.deliver(mail).await {
                tracing::warn!(error = %err, registration_id, "confirmation mail not delivered");
            }
        });

        Ok(())
    }
}
