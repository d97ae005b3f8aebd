use std::sync::Arc;

use portfolio_api_rest::{RestServerConfig, RestServerRealIpConfig};
use portfolio_config::Config;
use portfolio_core_contact_impl::{
    relay::ContactRelayServiceConfig, store::ContactStoreServiceConfig,
};
use portfolio_di::provider;
use portfolio_extern_impl::sheets::SheetsApiServiceConfig;
use types::Database;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        database: Database,
        ..config: ConfigProvider {
            // API
            RestServerConfig,

            // Extern
            SheetsApiServiceConfig,

            // Core
            ContactStoreServiceConfig,
            ContactRelayServiceConfig,
        }
    }
}

impl Provider {
    pub fn new(config: ConfigProvider, database: Database) -> Self {
        Self {
            _cache: Default::default(),
            database,
            config,
        }
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        // API
        rest_server_config: RestServerConfig,

        // Extern
        sheets_api_service_config: SheetsApiServiceConfig,

        // Core
        contact_store_service_config: ContactStoreServiceConfig,
        contact_relay_service_config: ContactRelayServiceConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // API
        let rest_server_config = RestServerConfig {
            host: config.http.host,
            port: config.http.port,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RestServerRealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
        };

        // Extern
        let sheets_api_service_config =
            SheetsApiServiceConfig::new(config.sheets.endpoint_override.clone());

        // Core
        let contact_store_service_config = ContactStoreServiceConfig {
            max_messages: config.contact.max_messages,
        };

        let contact_relay_service_config = ContactRelayServiceConfig::new(
            config.sheets.spreadsheet_id.clone(),
            config.sheets.api_key.clone(),
            config.sheets.range.clone(),
            config.sheets.timeout.into(),
        );

        Ok(Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Extern
            sheets_api_service_config,

            // Core
            contact_store_service_config,
            contact_relay_service_config,
        })
    }

    /// Whether accepted contact messages are forwarded to Google Sheets.
    pub fn relay_enabled(&self) -> bool {
        self.contact_relay_service_config.target.is_some()
    }
}
