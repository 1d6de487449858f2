use crate::application::ports::verification::{HumanVerifier, VerificationContext};
use async_trait::async_trait;

/// Verifier used when no challenge backend is configured: every request
/// passes.
#[derive(Default, Clone)]
pub struct AllowAllVerifier;

#[async_trait]
impl HumanVerifier for AllowAllVerifier {
    async fn verify(&self, context: &VerificationContext) -> bool {
        tracing::trace!(
            has_token = context.response_token.is_some(),
            "human verification disabled, accepting request"
        );
        true
    }
}

/// Placeholder gate: accepts any request that carries a non-blank challenge
/// response without asking the challenge provider whether it is genuine. It
/// only stops clients that skip the widget entirely.
#[derive(Default, Clone)]
pub struct TokenPresenceVerifier;

#[async_trait]
impl HumanVerifier for TokenPresenceVerifier {
    async fn verify(&self, context: &VerificationContext) -> bool {
        // A forged token passes as well as a real one.
        context
            .response_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}
