use std::fmt;

/// Business rules a registration attempt can break. Each carries the alert
/// code shown to the registrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationRuleViolation {
    RegistrationClosed,
    AlreadyRegistered,
    CapacityReached,
}

impl RegistrationRuleViolation {
    pub fn code(&self) -> &'static str {
        match self {
            RegistrationRuleViolation::RegistrationClosed => "registrationClosed",
            RegistrationRuleViolation::AlreadyRegistered => "alreadyRegistered",
            RegistrationRuleViolation::CapacityReached => "maxNumberOfRegistrationsReached",
        }
    }
}

impl fmt::Display for RegistrationRuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::error::Error for RegistrationRuleViolation {}
