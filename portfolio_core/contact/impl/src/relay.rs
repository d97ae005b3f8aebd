use std::{sync::Arc, time::Duration};

use chrono::SecondsFormat;
use portfolio_core_contact_contracts::relay::{ContactRelayOutcome, ContactRelayService};
use portfolio_di::Build;
use portfolio_extern_contracts::sheets::{SheetsApiService, SheetsTarget};
use portfolio_models::contact::ContactMessage;
use portfolio_utils::trace_instrument;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Build)]
pub struct ContactRelayServiceImpl<SheetsApi> {
    sheets_api: SheetsApi,
    config: ContactRelayServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactRelayServiceConfig {
    pub target: Option<Arc<SheetsTarget>>,
    pub timeout: Duration,
}

impl ContactRelayServiceConfig {
    /// The relay is enabled only if both the spreadsheet id and the api key
    /// are present and not empty.
    pub fn new(
        spreadsheet_id: Option<String>,
        api_key: Option<String>,
        range: String,
        timeout: Duration,
    ) -> Self {
        let target = spreadsheet_id
            .filter(|x| !x.trim().is_empty())
            .zip(api_key.filter(|x| !x.trim().is_empty()))
            .map(|(spreadsheet_id, api_key)| {
                SheetsTarget {
                    spreadsheet_id,
                    range,
                    api_key,
                }
                .into()
            });

        Self { target, timeout }
    }
}

impl<SheetsApi> ContactRelayService for ContactRelayServiceImpl<SheetsApi>
where
    SheetsApi: SheetsApiService,
{
    #[trace_instrument(skip(self))]
    async fn relay(&self, message: &ContactMessage) -> ContactRelayOutcome {
        let Some(target) = &self.config.target else {
            debug!("Spreadsheet relay is not configured, skipping");
            return ContactRelayOutcome::Skipped;
        };

        let values = row_values(message);
        let result = tokio::time::timeout(
            self.config.timeout,
            self.sheets_api.append_row(target, &values),
        )
        .await;

        match result {
            Ok(Ok(())) => {
                info!(id = %message.id, "Relayed contact message to spreadsheet");
                ContactRelayOutcome::Relayed
            }
            Ok(Err(err)) => {
                warn!(id = %message.id, "Failed to relay contact message to spreadsheet: {err:#}");
                ContactRelayOutcome::Failed
            }
            Err(_) => {
                warn!(
                    id = %message.id,
                    timeout = ?self.config.timeout,
                    "Timed out while relaying contact message to spreadsheet"
                );
                ContactRelayOutcome::Failed
            }
        }
    }
}

fn row_values(message: &ContactMessage) -> Vec<String> {
    vec![
        (*message.name).clone(),
        message.email.to_string(),
        (*message.message).clone(),
        message
            .created_at
            .to_rfc3339_opts(SecondsFormat::Millis, true),
    ]
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use portfolio_demo::contact::FOO;
    use portfolio_extern_contracts::sheets::MockSheetsApiService;
    use pretty_assertions::assert_eq;

    use super::*;

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn make_target() -> SheetsTarget {
        SheetsTarget {
            spreadsheet_id: "portfolio-contacts".into(),
            range: "Sheet1!A:D".into(),
            api_key: "secret".into(),
        }
    }

    fn make_config() -> ContactRelayServiceConfig {
        ContactRelayServiceConfig {
            target: Some(make_target().into()),
            timeout: TIMEOUT,
        }
    }

    fn foo_values() -> Vec<String> {
        vec![
            "Max Mustermann".into(),
            "max.mustermann@example.de".into(),
            "Hello! I would like to talk about a freelance project.".into(),
            "2024-03-01T09:30:00.000Z".into(),
        ]
    }

    #[tokio::test]
    async fn relayed() {
        // Arrange
        let sheets_api =
            MockSheetsApiService::new().with_append_row(make_target(), foo_values(), Ok(()));

        let sut = ContactRelayServiceImpl {
            sheets_api,
            config: make_config(),
        };

        // Act
        let result = sut.relay(&FOO).await;

        // Assert
        assert_eq!(result, ContactRelayOutcome::Relayed);
    }

    #[tokio::test]
    async fn not_configured() {
        // Arrange
        let sut = ContactRelayServiceImpl {
            sheets_api: MockSheetsApiService::new(),
            config: ContactRelayServiceConfig {
                target: None,
                timeout: TIMEOUT,
            },
        };

        // Act
        let result = sut.relay(&FOO).await;

        // Assert
        assert_eq!(result, ContactRelayOutcome::Skipped);
    }

    #[tokio::test]
    async fn api_error() {
        // Arrange
        let sheets_api = MockSheetsApiService::new().with_append_row(
            make_target(),
            foo_values(),
            Err(anyhow!("403 Forbidden")),
        );

        let sut = ContactRelayServiceImpl {
            sheets_api,
            config: make_config(),
        };

        // Act
        let result = sut.relay(&FOO).await;

        // Assert
        assert_eq!(result, ContactRelayOutcome::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout() {
        // Arrange
        let mut sheets_api = MockSheetsApiService::new();
        sheets_api
            .expect_append_row()
            .once()
            .return_once(|_, _| Box::pin(std::future::pending()));

        let sut = ContactRelayServiceImpl {
            sheets_api,
            config: make_config(),
        };

        // Act
        let start = tokio::time::Instant::now();
        let result = sut.relay(&FOO).await;

        // Assert
        assert_eq!(result, ContactRelayOutcome::Failed);
        assert!(start.elapsed() >= TIMEOUT);
    }

    #[test]
    fn config_requires_id_and_key() {
        for (spreadsheet_id, api_key, enabled) in [
            (Some("sheet"), Some("key"), true),
            (None, Some("key"), false),
            (Some("sheet"), None, false),
            (Some(""), Some("key"), false),
            (Some("sheet"), Some("  "), false),
            (None, None, false),
        ] {
            let config = ContactRelayServiceConfig::new(
                spreadsheet_id.map(Into::into),
                api_key.map(Into::into),
                "Sheet1!A:D".into(),
                TIMEOUT,
            );
            assert_eq!(
                config.target.is_some(),
                enabled,
                "{spreadsheet_id:?} {api_key:?}"
            );
        }
    }

    #[test]
    fn config_target() {
        let config = ContactRelayServiceConfig::new(
            Some("sheet".into()),
            Some("key".into()),
            "Contacts!A:D".into(),
            TIMEOUT,
        );

        assert_eq!(
            config.target.as_deref(),
            Some(&SheetsTarget {
                spreadsheet_id: "sheet".into(),
                range: "Contacts!A:D".into(),
                api_key: "key".into(),
            })
        );
    }
}
