use portfolio_core_contact_impl::{
    relay::ContactRelayServiceImpl, store::ContactStoreServiceImpl, ContactFeatureServiceImpl,
};
use portfolio_extern_impl::sheets::SheetsApiServiceImpl;
use portfolio_persistence_memory::{contact::MemoryContactRepository, MemoryDatabase};
use portfolio_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};

// API
pub type RestServer = portfolio_api_rest::RestServer<ContactFeature>;

// Persistence
pub type Database = MemoryDatabase;

// Extern
pub type SheetsApi = SheetsApiServiceImpl;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Repositories
pub type ContactRepo = MemoryContactRepository;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Database, ContactStore, ContactRelay>;
pub type ContactStore = ContactStoreServiceImpl<Id, Time, ContactRepo>;
pub type ContactRelay = ContactRelayServiceImpl<SheetsApi>;
