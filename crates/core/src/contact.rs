//! Contact form messages.

use serde::Deserialize;
use validator::Validate;

use crate::validation::not_blank;

pub const MAX_NAME_LEN: u64 = 100;
pub const MAX_SUBJECT_LEN: u64 = 200;
pub const MAX_MESSAGE_LEN: u64 = 5000;

/// Prefix that lets the owner filter contact mail in their inbox.
pub const SUBJECT_PREFIX: &str = "[Portfolio Contact]";

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactMessage {
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Name is required"),
        length(max = 100, message = "Name must be at most 100 characters")
    )]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Subject is required"),
        length(max = 200, message = "Subject must be at most 200 characters")
    )]
    pub subject: String,

    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Message is required"),
        length(max = 5000, message = "Message must be at most 5000 characters")
    )]
    pub message: String,
}

impl ContactMessage {
    pub fn subject_line(&self) -> String {
        format!("{SUBJECT_PREFIX} {}", self.subject.trim())
    }

    /// Plain-text body of the notification email.
    pub fn body(&self) -> String {
        format!(
            "You have received a new contact form submission:\n\n\
             From: {}\n\
             Email: {}\n\
             Subject: {}\n\n\
             Message:\n{}\n",
            self.name.trim(),
            self.email.trim(),
            self.subject.trim(),
            self.message
        )
    }
}
