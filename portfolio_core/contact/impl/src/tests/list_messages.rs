use portfolio_core_contact_contracts::{store::MockContactStoreService, ContactFeatureService};
use portfolio_demo::contact::{ALL_CONTACT_MESSAGES, FOO};
use portfolio_persistence_contracts::MockDatabase;
use pretty_assertions::assert_eq;

use super::Sut;

#[tokio::test]
async fn ok() {
    // Arrange
    let expected = ALL_CONTACT_MESSAGES.iter().copied().cloned().collect::<Vec<_>>();

    let db = MockDatabase::build(false);
    let contact_store = MockContactStoreService::new().with_list_all(expected.clone());

    let sut = Sut {
        db,
        contact_store,
        ..Sut::default()
    };

    // Act
    let result = sut.list_messages().await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn single() {
    // Arrange
    let db = MockDatabase::build(false);
    let contact_store = MockContactStoreService::new().with_list_all(vec![FOO.clone()]);

    let sut = Sut {
        db,
        contact_store,
        ..Sut::default()
    };

    // Act
    let result = sut.list_messages().await;

    // Assert
    assert_eq!(result.unwrap(), [FOO.clone()]);
}

#[tokio::test]
async fn empty() {
    // Arrange
    let db = MockDatabase::build(false);
    let contact_store = MockContactStoreService::new().with_list_all(Vec::new());

    let sut = Sut {
        db,
        contact_store,
        ..Sut::default()
    };

    // Act
    let result = sut.list_messages().await;

    // Assert
    assert!(result.unwrap().is_empty());
}
