// src/application/ports/mod.rs
pub mod notification;
pub mod rendering;
pub mod time;
pub mod verification;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type HumanVerifierPort = dyn verification::HumanVerifier;
pub type ConfirmationNotifierPort = dyn notification::ConfirmationNotifier;
pub type PostBodyRendererPort = dyn rendering::PostBodyRenderer;
