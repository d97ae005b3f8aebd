use std::sync::LazyLock;

use chrono::{TimeZone, Utc};
use portfolio_models::contact::{ContactMessage, ContactSubmission};
use portfolio_persistence_contracts::contact::ContactRepository;
use uuid::uuid;

pub static ALL_CONTACT_MESSAGES: LazyLock<Vec<&ContactMessage>> =
    LazyLock::new(|| vec![&FOO, &BAR]);

pub static FOO: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: uuid!("0f1d3ad2-73c4-4c39-9b6e-3c5bd2a6b0c1").into(),
    name: "Max Mustermann".to_owned().try_into().unwrap(),
    email: "max.mustermann@example.de".parse().unwrap(),
    message: "Hello! I would like to talk about a freelance project."
        .to_owned()
        .try_into()
        .unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
});

pub static BAR: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    id: uuid!("5b8e1f7e-2c1a-4f7d-a3d4-98a61e2e4b77").into(),
    name: "Al".to_owned().try_into().unwrap(),
    email: "al@example.com".parse().unwrap(),
    message: "Hello, this is a test message.".to_owned().try_into().unwrap(),
    created_at: Utc.with_ymd_and_hms(2024, 3, 2, 17, 5, 12).unwrap(),
});

/// Returns the submission the given demo message was created from.
pub fn submission(message: &ContactMessage) -> ContactSubmission {
    ContactSubmission {
        name: message.name.clone(),
        email: message.email.clone(),
        message: message.message.clone(),
    }
}

pub async fn create<Txn: Send + Sync + 'static>(
    txn: &mut Txn,
    repo: impl ContactRepository<Txn>,
) -> anyhow::Result<()> {
    for &message in &*ALL_CONTACT_MESSAGES {
        repo.create(txn, message).await?;
    }
    Ok(())
}
