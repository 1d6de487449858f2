use crate::domain::{errors::DomainError, registration::RegistrationRuleViolation};

const CNT_REGISTRATION_EMAIL: &str = "registrations_event_id_email_key";
const CNT_REGISTRATION_EVENT: &str = "registrations_event_id_fkey";
const CNT_POST_ADDRESS: &str = "posts_published_on_slug_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_REGISTRATION_EMAIL => RegistrationRuleViolation::AlreadyRegistered.into(),
                    CNT_REGISTRATION_EVENT => DomainError::NotFound("event not found".into()),
                    CNT_POST_ADDRESS => {
                        DomainError::Conflict("a post with this date and slug already exists".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
