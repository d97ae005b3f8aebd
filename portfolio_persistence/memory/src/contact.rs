use anyhow::Context;
use portfolio_di::Build;
use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::contact::{ContactRepoError, ContactRepository};
use portfolio_utils::trace_instrument;

use crate::MemoryTransaction;

#[derive(Debug, Clone, Copy, Default, Build)]
pub struct MemoryContactRepository;

impl ContactRepository<MemoryTransaction> for MemoryContactRepository {
    #[trace_instrument(skip(self, txn))]
    async fn lock(&self, txn: &mut MemoryTransaction) -> anyhow::Result<()> {
        txn.lock_writes().await;
        Ok(())
    }

    #[trace_instrument(skip(self, txn))]
    async fn list(&self, txn: &mut MemoryTransaction) -> anyhow::Result<Vec<ContactMessage>> {
        let state = txn.state.read().await;
        Ok(state
            .contact_messages
            .iter()
            .chain(&txn.staged.contact_messages)
            .cloned()
            .collect())
    }

    #[trace_instrument(skip(self, txn))]
    async fn count(&self, txn: &mut MemoryTransaction) -> anyhow::Result<u64> {
        let committed = txn.state.read().await.contact_messages.len();
        let total = committed + txn.staged.contact_messages.len();
        u64::try_from(total).context("Contact message count does not fit into u64")
    }

    #[trace_instrument(skip(self, txn))]
    async fn create(
        &self,
        txn: &mut MemoryTransaction,
        message: &ContactMessage,
    ) -> Result<(), ContactRepoError> {
        txn.lock_writes().await;

        let state = txn.state.read().await;
        if state
            .contact_messages
            .iter()
            .chain(&txn.staged.contact_messages)
            .any(|m| m.id == message.id)
        {
            return Err(ContactRepoError::Conflict(message.id));
        }
        drop(state);

        txn.staged.contact_messages.push(message.clone());
        Ok(())
    }
}
