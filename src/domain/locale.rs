// src/domain/locale.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};

/// A BCP 47 style language tag such as `de` or `en-US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(String);

impl Locale {
    pub fn new(tag: impl AsRef<str>) -> DomainResult<Self> {
        let tag = tag.as_ref().trim();
        let mut parts = tag.split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(DomainError::Validation(format!("invalid locale '{tag}'")));
        }

        let mut normalized = language.to_ascii_lowercase();
        for part in parts {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(DomainError::Validation(format!("invalid locale '{tag}'")));
            }
            normalized.push('-');
            if part.len() == 2 {
                normalized.push_str(&part.to_ascii_uppercase());
            } else {
                normalized.push_str(part);
            }
        }
        Ok(Self(normalized))
    }

    /// Picks the first acceptable entry of an `Accept-Language` header,
    /// honouring quality values. Wildcards are skipped.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        let mut candidates: Vec<(f32, usize, Locale)> = header
            .split(',')
            .enumerate()
            .filter_map(|(position, entry)| {
                let mut pieces = entry.split(';');
                let tag = pieces.next()?.trim();
                if tag == "*" {
                    return None;
                }
                let quality = pieces
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);
                if quality <= 0.0 {
                    return None;
                }
                Locale::new(tag).ok().map(|locale| (quality, position, locale))
            })
            .collect();

        candidates.sort_by(|a, b| b.0.total_cmp(&a.0).then(a.1.cmp(&b.1)));
        candidates.into_iter().next().map(|(_, _, locale)| locale)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The primary language subtag, e.g. `de` for `de-AT`.
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
