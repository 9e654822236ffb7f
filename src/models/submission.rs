//! Contact form and feedback submissions (insert-only).

use serde::Deserialize;
use validator::Validate;

/// Body of `POST /submit-contact`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub message: Option<String>,
}

/// Validated contact message ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    /// Presence check only; returns `None` when any field is missing or empty.
    pub fn into_message(self) -> Option<ContactMessage> {
        self.validate().ok()?;
        Some(ContactMessage {
            name: self.name?,
            email: self.email?,
            message: self.message?,
        })
    }
}

/// Body of `POST /submit_feedback`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct FeedbackRequest {
    #[serde(default)]
    #[validate(required, length(min = 1))]
    pub feedback: Option<String>,
}

impl FeedbackRequest {
    pub fn into_text(self) -> Option<String> {
        self.validate().ok()?;
        self.feedback
    }
}
