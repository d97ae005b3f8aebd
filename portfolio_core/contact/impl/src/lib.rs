use portfolio_core_contact_contracts::{
    relay::ContactRelayService,
    store::{ContactStoreAppendError, ContactStoreService},
    ContactFeatureService, ContactSubmitError,
};
use portfolio_di::Build;
use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::{Database, Transaction};
use portfolio_utils::trace_instrument;
use tracing::debug;

use crate::validate::validate_submission;

pub mod relay;
pub mod store;
pub mod validate;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Build, Default)]
pub struct ContactFeatureServiceImpl<Db, ContactStore, ContactRelay> {
    db: Db,
    contact_store: ContactStore,
    contact_relay: ContactRelay,
}

impl<Db, ContactStore, ContactRelay> ContactFeatureService
    for ContactFeatureServiceImpl<Db, ContactStore, ContactRelay>
where
    Db: Database,
    ContactStore: ContactStoreService<Db::Transaction>,
    ContactRelay: ContactRelayService,
{
    #[trace_instrument(skip(self))]
    async fn submit_message(
        &self,
        payload: serde_json::Value,
    ) -> Result<ContactMessage, ContactSubmitError> {
        let submission = validate_submission(&payload).map_err(ContactSubmitError::Invalid)?;

        let mut txn = self.db.begin_transaction().await?;

        let message = self
            .contact_store
            .append(&mut txn, submission)
            .await
            .map_err(|err| match err {
                ContactStoreAppendError::Full => ContactSubmitError::StoreFull,
                ContactStoreAppendError::Other(err) => err.into(),
            })?;

        txn.commit().await?;

        // the stored message is authoritative, the relay only mirrors it
        let outcome = self.contact_relay.relay(&message).await;
        debug!(id = %message.id, ?outcome, "Accepted contact message");

        Ok(message)
    }

    #[trace_instrument(skip(self))]
    async fn list_messages(&self) -> anyhow::Result<Vec<ContactMessage>> {
        let mut txn = self.db.begin_transaction().await?;
        self.contact_store.list_all(&mut txn).await
    }
}
