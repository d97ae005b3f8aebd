use chrono::{DateTime, Utc};

use crate::{
    email_address::EmailAddress,
    macros::{id, nutype_string},
};

id!(ContactMessageId);

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
}

/// A contact form submission which has been accepted and stored.
///
/// Records are created exactly once and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn new(
        id: ContactMessageId,
        submission: ContactSubmission,
        created_at: DateTime<Utc>,
    ) -> Self {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        Self {
            id,
            name,
            email,
            message,
            created_at,
        }
    }
}

nutype_string!(ContactMessageAuthorName(validate(
    len_char_min = ContactMessageAuthorName::MIN_LEN
)));

impl ContactMessageAuthorName {
    pub const MIN_LEN: usize = 2;
}

nutype_string!(ContactMessageContent(validate(
    len_char_min = ContactMessageContent::MIN_LEN
)));

impl ContactMessageContent {
    pub const MIN_LEN: usize = 10;
}

/// The fields of a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// The key of the field in a submission payload.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human readable name of the field.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

/// A violated constraint on a single field of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFieldError {
    pub field: ContactField,
    pub message: String,
}

impl ContactFieldError {
    pub fn new(field: ContactField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// All violations found in a rejected submission, ordered by field.
pub type ContactFieldErrors = Vec<ContactFieldError>;
