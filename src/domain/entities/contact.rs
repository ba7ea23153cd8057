use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct NewContactSubmission {
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(
        length(min = 1, max = 200, message = "Subject must be between 1 and 200 characters"),
        custom(function = "validate_not_blank")
    )]
    pub subject: String,

    #[validate(
        length(min = 1, max = 5000, message = "Message must be between 1 and 5000 characters"),
        custom(function = "validate_not_blank")
    )]
    pub message: String,
}

impl NewContactSubmission {
    pub fn into_submission(self, id: Uuid, created_at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Whitespace-only text. Empty text is left to the length rule.
fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.is_empty() && value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some(Cow::Borrowed("Must not be blank"));
        return Err(err);
    }
    Ok(())
}
