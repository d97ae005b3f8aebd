use std::sync::Arc;

use anyhow::{anyhow, ensure, Context};
use portfolio_di::Build;
use portfolio_extern_contracts::sheets::{SheetsApiService, SheetsTarget};
use portfolio_utils::trace_instrument;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

/// https://developers.google.com/sheets/api/reference/rest/v4/spreadsheets.values/append
const SPREADSHEETS_ENDPOINT: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

#[derive(Debug, Clone, Build)]
pub struct SheetsApiServiceImpl {
    config: SheetsApiServiceConfig,
    #[state]
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct SheetsApiServiceConfig {
    spreadsheets_endpoint: Arc<Url>,
}

impl SheetsApiServiceConfig {
    pub fn new(spreadsheets_endpoint_override: Option<Url>) -> Self {
        let spreadsheets_endpoint = match spreadsheets_endpoint_override {
            Some(endpoint) => endpoint,
            None => SPREADSHEETS_ENDPOINT
                .parse()
                .expect("default spreadsheets endpoint is a valid url"),
        };

        Self {
            spreadsheets_endpoint: spreadsheets_endpoint.into(),
        }
    }
}

impl SheetsApiServiceImpl {
    fn append_url(&self, target: &SheetsTarget) -> anyhow::Result<Url> {
        let mut url = (*self.config.spreadsheets_endpoint).clone();
        url.path_segments_mut()
            .map_err(|()| anyhow!("Spreadsheets endpoint cannot be a base url"))?
            .pop_if_empty()
            .push(&target.spreadsheet_id)
            .push("values")
            .push(&format!("{}:append", target.range));
        Ok(url)
    }
}

impl SheetsApiService for SheetsApiServiceImpl {
    #[trace_instrument(skip(self, values))]
    async fn append_row(&self, target: &SheetsTarget, values: &[String]) -> anyhow::Result<()> {
        // the api key is passed as a query parameter, so urls are stripped
        // from request errors to keep it out of the logs
        let url = self
            .append_url(target)
            .context("Failed to build sheets append URL")?;

        let response = self
            .http
            .post(url)
            .query(&[
                ("key", target.api_key.as_str()),
                ("valueInputOption", "USER_ENTERED"),
            ])
            .json(&AppendRequest {
                major_dimension: "ROWS",
                values: [values],
            })
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to send sheets append request")?
            .error_for_status()
            .map_err(reqwest::Error::without_url)
            .context("Sheets append request returned an error")?
            .json::<AppendResponse>()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to deserialize sheets append response")?;

        ensure!(
            response.updates.updated_rows > 0,
            "Sheets append request did not update any rows"
        );

        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppendRequest<'a> {
    major_dimension: &'a str,
    values: [&'a [String]; 1],
}

#[derive(Deserialize)]
struct AppendResponse {
    updates: AppendUpdates,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_rows: u64,
}
