use super::RegistrationInput;
use crate::domain::{
    event::Event,
    registration::{Registration, RegistrationRuleViolation},
};
use std::fmt;

/// Machine-readable result code shown to the registrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertCode {
    Registered,
    /// Failed human verification or malformed input. The two are reported
    /// identically.
    InvalidRegistration,
    Violation(RegistrationRuleViolation),
}

impl AlertCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCode::Registered => "registered",
            AlertCode::InvalidRegistration => "invalidRegistration",
            AlertCode::Violation(violation) => violation.code(),
        }
    }
}

impl fmt::Display for AlertCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<RegistrationRuleViolation> for AlertCode {
    fn from(value: RegistrationRuleViolation) -> Self {
        AlertCode::Violation(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    /// Unknown event. Nothing was checked or written.
    EventNotFound,
    /// The form must be shown again with `input` and `alert`.
    Rejected {
        event: Event,
        input: RegistrationInput,
        alert: AlertCode,
    },
    Registered {
        event: Event,
        registration: Registration,
    },
}

impl RegistrationOutcome {
    pub fn alert(&self) -> Option<AlertCode> {
        match self {
            RegistrationOutcome::EventNotFound => None,
            RegistrationOutcome::Rejected { alert, .. } => Some(*alert),
            RegistrationOutcome::Registered { .. } => Some(AlertCode::Registered),
        }
    }
}
