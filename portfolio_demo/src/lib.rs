use portfolio_persistence_contracts::contact::ContactRepository;

pub mod contact;

/// Stores all demo records using the given repositories.
pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    contact: impl ContactRepository<Txn>,
) -> anyhow::Result<()> {
    contact::create(txn, contact).await
}
