//! Process-local storage backend.
//!
//! All data lives in memory and is lost when the process exits. Writes are
//! staged in a [`MemoryTransaction`] and applied atomically on commit, so
//! concurrent readers only ever observe fully committed records.
//!
//! At most one transaction at a time may write. The write lock is taken on
//! the first write (or an explicit lock) and held until the transaction is
//! committed, rolled back or dropped.

use std::sync::Arc;

use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::{Database, Transaction};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use tracing::trace;

pub mod contact;

#[derive(Debug, Clone, Default)]
pub struct MemoryDatabase {
    state: Arc<RwLock<MemoryState>>,
    writer: Arc<Mutex<()>>,
}

#[derive(Debug, Default)]
struct MemoryState {
    contact_messages: Vec<ContactMessage>,
}

#[derive(Debug)]
pub struct MemoryTransaction {
    state: Arc<RwLock<MemoryState>>,
    writer: Arc<Mutex<()>>,
    write_lock: Option<OwnedMutexGuard<()>>,
    staged: MemoryState,
}

impl MemoryTransaction {
    async fn lock_writes(&mut self) {
        if self.write_lock.is_none() {
            self.write_lock = Some(Arc::clone(&self.writer).lock_owned().await);
        }
    }
}

impl MemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Database for MemoryDatabase {
    type Transaction = MemoryTransaction;

    async fn begin_transaction(&self) -> anyhow::Result<Self::Transaction> {
        Ok(MemoryTransaction {
            state: Arc::clone(&self.state),
            writer: Arc::clone(&self.writer),
            write_lock: None,
            staged: MemoryState::default(),
        })
    }
}

impl Transaction for MemoryTransaction {
    async fn commit(self) -> anyhow::Result<()> {
        let Self {
            state,
            staged: MemoryState { contact_messages },
            write_lock,
            ..
        } = self;
        if contact_messages.is_empty() {
            return Ok(());
        }

        let mut state = state.write().await;
        trace!(
            contact_messages = contact_messages.len(),
            "applying staged writes"
        );
        state.contact_messages.extend(contact_messages);
        drop(state);
        drop(write_lock);

        Ok(())
    }

    async fn rollback(self) -> anyhow::Result<()> {
        Ok(())
    }
}
