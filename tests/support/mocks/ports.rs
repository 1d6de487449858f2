// tests/support/mocks/ports.rs
use async_trait::async_trait;
use community_site::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::{
        notification::ConfirmationNotifier,
        rendering::PostBodyRenderer,
        verification::{HumanVerifier, VerificationContext},
    },
};
use community_site::domain::{
    event::Event, locale::Locale, post::Post, registration::Registration,
};
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Verifier with a fixed verdict.
#[derive(Debug, Default)]
pub struct StaticVerifier {
    pub verdict: bool,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<VerificationContext>>,
}

impl StaticVerifier {
    pub fn passing() -> Self {
        Self {
            verdict: true,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HumanVerifier for StaticVerifier {
    async fn verify(&self, context: &VerificationContext) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(context.clone());
        self.verdict
    }
}

/// A confirmation as the notifier saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct SentConfirmation {
    pub registration: Registration,
    pub event_title: String,
    pub locale: Locale,
}

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    pub sent: Mutex<Vec<SentConfirmation>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentConfirmation> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmationNotifier for RecordingNotifier {
    async fn send_confirmation(
        &self,
        registration: &Registration,
        event: &Event,
        locale: &Locale,
    ) -> ApplicationResult<()> {
        self.sent.lock().unwrap().push(SentConfirmation {
            registration: registration.clone(),
            event_title: event.title().to_string(),
            locale: locale.clone(),
        });
        if self.fail {
            Err(ApplicationError::infrastructure("mail relay refused connection"))
        } else {
            Ok(())
        }
    }
}

/// Wraps the stored body in a paragraph so tests can tell it was rendered.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParagraphRenderer;

impl PostBodyRenderer for ParagraphRenderer {
    fn render(&self, post: &Post) -> String {
        format!("<p>{}</p>", post.content())
    }
}
