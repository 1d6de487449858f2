use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Registration form payload as submitted. Kept verbatim so a rejected form
/// can be shown again with the user's input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    #[serde(default)]
    #[validate(email, length(max = 1024))]
    pub email: String,
    /// Last name.
    #[serde(default)]
    #[validate(length(min = 1, max = 512))]
    pub name: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 512))]
    pub first_name: String,
}

impl RegistrationInput {
    pub fn new(
        email: impl Into<String>,
        name: impl Into<String>,
        first_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            first_name: first_name.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn normalized(&self) -> Self {
        Self {
            email: self.email.trim().to_string(),
            name: self.name.trim().to_string(),
            first_name: self.first_name.trim().to_string(),
        }
    }
}
