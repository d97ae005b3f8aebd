use anyhow::Context;
use portfolio_core_contact_contracts::store::{ContactStoreAppendError, ContactStoreService};
use portfolio_di::Build;
use portfolio_models::contact::{ContactMessage, ContactSubmission};
use portfolio_persistence_contracts::contact::ContactRepository;
use portfolio_shared_contracts::{id::IdService, time::TimeService};
use portfolio_utils::trace_instrument;

#[derive(Debug, Clone, Build, Default)]
pub struct ContactStoreServiceImpl<Id, Time, ContactRepo> {
    id: Id,
    time: Time,
    contact_repo: ContactRepo,
    config: ContactStoreServiceConfig,
}

#[derive(Debug, Clone, Default)]
pub struct ContactStoreServiceConfig {
    /// Maximum number of stored messages, unbounded if `None`.
    pub max_messages: Option<u64>,
}

impl<Txn, Id, Time, ContactRepo> ContactStoreService<Txn>
    for ContactStoreServiceImpl<Id, Time, ContactRepo>
where
    Txn: Send + Sync + 'static,
    Id: IdService,
    Time: TimeService,
    ContactRepo: ContactRepository<Txn>,
{
    #[trace_instrument(skip(self, txn))]
    async fn append(
        &self,
        txn: &mut Txn,
        submission: ContactSubmission,
    ) -> Result<ContactMessage, ContactStoreAppendError> {
        // held until the transaction ends, so the count below stays accurate
        // and commits happen in timestamp order
        self.contact_repo
            .lock(txn)
            .await
            .context("Failed to lock contact messages in database")?;

        if let Some(max_messages) = self.config.max_messages {
            let count = self
                .contact_repo
                .count(txn)
                .await
                .context("Failed to count contact messages in database")?;
            if count >= max_messages {
                return Err(ContactStoreAppendError::Full);
            }
        }

        let message = ContactMessage::new(self.id.generate(), submission, self.time.now());

        self.contact_repo
            .create(txn, &message)
            .await
            .context("Failed to create contact message in database")?;

        Ok(message)
    }

    #[trace_instrument(skip(self, txn))]
    async fn list_all(&self, txn: &mut Txn) -> anyhow::Result<Vec<ContactMessage>> {
        self.contact_repo
            .list(txn)
            .await
            .context("Failed to list contact messages from database")
    }
}
