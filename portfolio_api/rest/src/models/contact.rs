use chrono::{DateTime, Utc};
use portfolio_models::{
    contact::{
        ContactFieldError, ContactMessage, ContactMessageAuthorName, ContactMessageContent,
        ContactMessageId,
    },
    email_address::EmailAddress,
};
use serde::Serialize;

use super::ApiFieldError;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiContactMessage {
    pub id: ContactMessageId,
    pub name: ContactMessageAuthorName,
    pub email: EmailAddress,
    pub message: ContactMessageContent,
    pub created_at: DateTime<Utc>,
}

impl From<ContactMessage> for ApiContactMessage {
    fn from(value: ContactMessage) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email,
            message: value.message,
            created_at: value.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ApiContactSubmitted {
    pub success: bool,
    pub message: &'static str,
    pub data: ApiContactMessage,
}

impl From<ContactFieldError> for ApiFieldError {
    fn from(value: ContactFieldError) -> Self {
        Self {
            path: vec![value.field.key()],
            message: value.message,
        }
    }
}
