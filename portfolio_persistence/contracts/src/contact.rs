use std::future::Future;

use portfolio_models::contact::{ContactMessage, ContactMessageId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Waits until no other transaction holds the contact message lock and
    /// acquires it for the remaining lifetime of `txn`.
    ///
    /// While the lock is held, no other transaction can append contact
    /// messages, so counts read afterwards stay valid until commit.
    fn lock(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Returns all contact messages in insertion order.
    fn list(&self, txn: &mut Txn)
        -> impl Future<Output = anyhow::Result<Vec<ContactMessage>>> + Send;

    /// Returns the number of stored contact messages.
    fn count(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Appends a new contact message.
    ///
    /// Returns an error if a message with the same id already exists.
    fn create(
        &self,
        txn: &mut Txn,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<(), ContactRepoError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactRepoError {
    #[error("A contact message with the id {0} already exists.")]
    Conflict(ContactMessageId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactRepository<Txn> {
    pub fn with_lock(mut self) -> Self {
        self.expect_lock()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_list(mut self, result: Vec<ContactMessage>) -> Self {
        self.expect_list()
            .once()
            .with(mockall::predicate::always())
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_count(mut self, result: u64) -> Self {
        self.expect_count()
            .once()
            .with(mockall::predicate::always())
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_create(
        mut self,
        message: ContactMessage,
        result: Result<(), ContactRepoError>,
    ) -> Self {
        self.expect_create()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(message),
            )
            .return_once(|_, _| Box::pin(std::future::ready(result)));
        self
    }
}
