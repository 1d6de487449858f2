// src/domain/errors.rs
use crate::domain::registration::RegistrationRuleViolation;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("registration rejected: {0}")]
    Registration(#[from] RegistrationRuleViolation),
    #[error("persistence error: {0}")]
    Persistence(String),
}
