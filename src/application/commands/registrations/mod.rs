// src/application/commands/registrations/mod.rs
mod input;
mod outcome;
mod register;
mod service;

pub use input::RegistrationInput;
pub use outcome::{AlertCode, RegistrationOutcome};
pub use register::RegisterCommand;
pub use service::RegistrationCommandService;
