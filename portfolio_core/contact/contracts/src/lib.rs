use std::future::Future;

use portfolio_models::contact::{ContactFieldErrors, ContactMessage};
use thiserror::Error;

pub mod relay;
pub mod store;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFeatureService: Send + Sync + 'static {
    /// Validate the given contact form payload, store it and forward it to
    /// the external relay.
    ///
    /// The relay is best-effort: its outcome never affects the result.
    fn submit_message(
        &self,
        payload: serde_json::Value,
    ) -> impl Future<Output = Result<ContactMessage, ContactSubmitError>> + Send;

    /// Return all stored contact messages in insertion order.
    fn list_messages(&self) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactSubmitError {
    #[error("The submission is invalid.")]
    Invalid(ContactFieldErrors),
    #[error("The message store is full.")]
    StoreFull,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactFeatureService {
    pub fn with_submit_message(
        mut self,
        payload: serde_json::Value,
        result: Result<ContactMessage, ContactSubmitError>,
    ) -> Self {
        self.expect_submit_message()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(|_| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_messages(mut self, result: anyhow::Result<Vec<ContactMessage>>) -> Self {
        self.expect_list_messages()
            .once()
            .return_once(|| Box::pin(std::future::ready(result)));
        self
    }
}
