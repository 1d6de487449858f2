use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use validator::ValidateEmail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(i64);

impl RegistrationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("registration id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RegistrationId> for i64 {
    fn from(value: RegistrationId) -> Self {
        value.0
    }
}

/// Email address of a registrant, kept as submitted. Duplicate checks go
/// through [`RegistrationEmail::matches`], which ignores case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationEmail(String);

impl RegistrationEmail {
    pub const MAX_LENGTH: usize = 1024;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("email cannot be empty".into()));
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(DomainError::Validation("email is too long".into()));
        }
        if !value.validate_email() {
            return Err(DomainError::Validation("email is malformed".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Lowercased form, the key the store's unique index is built on.
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn matches(&self, other: &RegistrationEmail) -> bool {
        self.normalized() == other.normalized()
    }
}

impl fmt::Display for RegistrationEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub const MAX_LENGTH: usize = 512;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation("name is too long".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
