// src/application/ports/verification.rs
use async_trait::async_trait;

/// What the human-verification gate gets to see of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationContext {
    /// Challenge response submitted with the form, if any.
    pub response_token: Option<String>,
    pub remote_addr: Option<String>,
}

#[async_trait]
pub trait HumanVerifier: Send + Sync {
    /// `true` when the request passed the challenge. Backend failures count
    /// as not verified.
    async fn verify(&self, context: &VerificationContext) -> bool;
}
