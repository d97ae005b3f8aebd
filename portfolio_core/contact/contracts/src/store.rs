use std::future::Future;

use portfolio_models::contact::{ContactMessage, ContactSubmission};
use thiserror::Error;

/// Append-only store of accepted contact messages.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactStoreService<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Assign an id and a creation timestamp to the given submission and
    /// append the resulting record to the store.
    fn append(
        &self,
        txn: &mut Txn,
        submission: ContactSubmission,
    ) -> impl Future<Output = Result<ContactMessage, ContactStoreAppendError>> + Send;

    /// Return a snapshot of all stored records in insertion order.
    fn list_all(
        &self,
        txn: &mut Txn,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactStoreAppendError {
    #[error("The maximum number of contact messages has been reached.")]
    Full,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactStoreService<Txn> {
    pub fn with_append(
        mut self,
        submission: ContactSubmission,
        result: Result<ContactMessage, ContactStoreAppendError>,
    ) -> Self {
        self.expect_append()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(submission),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }

    pub fn with_list_all(mut self, result: Vec<ContactMessage>) -> Self {
        self.expect_list_all()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
