use portfolio_config::Config;
use portfolio_di::Provides;
use tracing::info;

use crate::environment::{
    types::{Database, RestServer},
    ConfigProvider, Provider,
};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    match &config.contact.max_messages {
        Some(max_messages) => info!("Storing at most {max_messages} contact messages in memory"),
        None => info!("Storing contact messages in memory"),
    }

    let config_provider = ConfigProvider::new(&config)?;
    if config_provider.relay_enabled() {
        info!("Forwarding contact messages to Google Sheets");
    } else {
        info!("Google Sheets is not configured, contact messages are stored locally only");
    }

    let mut provider = Provider::new(config_provider, Database::new());
    let server: RestServer = provider.provide();
    server.serve().await
}
