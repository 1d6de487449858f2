use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkId(i64);

impl LinkId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("link id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<LinkId> for i64 {
    fn from(value: LinkId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTitle(String);

impl LinkTitle {
    pub const MAX_LENGTH: usize = 512;

    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(DomainError::Validation("link title cannot be empty".into()));
        }
        if value.chars().count() > Self::MAX_LENGTH {
            return Err(DomainError::Validation("link title is too long".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sidebar section a link is listed under. Variants are declared in the
/// order of their stored names, so the derived ordering matches the store's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    Generic,
    Partner,
    Sponsor,
}

impl LinkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkType::Generic => "generic",
            LinkType::Partner => "partner",
            LinkType::Sponsor => "sponsor",
        }
    }
}

impl FromStr for LinkType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generic" => Ok(LinkType::Generic),
            "partner" => Ok(LinkType::Partner),
            "sponsor" => Ok(LinkType::Sponsor),
            other => Err(DomainError::Validation(format!("unknown link type '{other}'"))),
        }
    }
}
