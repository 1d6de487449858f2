use super::OutgoingMail;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("mail rejected: {0}")]
    Rejected(String),
}

/// Outbound mail channel.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn deliver(&self, mail: OutgoingMail) -> Result<(), TransportError>;
}

/// Writes mails to the log instead of sending them. The default until a
/// relay is configured.
#[derive(Default, Clone)]
pub struct LoggingMailTransport;

#[async_trait]
impl MailTransport for LoggingMailTransport {
    async fn deliver(&self, mail: OutgoingMail) -> Result<(), TransportError> {
        tracing::info!(
            from = %mail.from,
            to = %mail.to,
            subject = %mail.subject,
            "confirmation mail"
        );
        tracing::debug!(body = %mail.body, "confirmation mail body");
        Ok(())
    }
}
