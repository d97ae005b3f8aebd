use portfolio_core_contact_contracts::{
    relay::MockContactRelayService, store::MockContactStoreService,
};
use portfolio_models::contact::ContactMessage;
use portfolio_persistence_contracts::{MockDatabase, MockTransaction};
use serde_json::json;

use crate::ContactFeatureServiceImpl;

mod list_messages;

type Sut = ContactFeatureServiceImpl<
    MockDatabase,
    MockContactStoreService<MockTransaction>,
    MockContactRelayService,
>;

fn payload(message: &ContactMessage) -> serde_json::Value {
    json!({
        "name": message.name.as_str(),
        "email": message.email.as_str(),
        "message": message.message.as_str(),
    })
}
