//! Fake implementation of the Google Sheets `values:append` endpoint.
//!
//! Rows are kept in memory and can be inspected through
//! [`SheetsTestServer::rows`].

use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex, PoisonError},
};

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;
use url::Url;

const SPREADSHEETS_ROUTE: &str = "/v4/spreadsheets";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedRow {
    pub spreadsheet_id: String,
    pub range: String,
    pub values: Vec<String>,
}

#[derive(Debug)]
struct SheetsState {
    api_key: String,
    rows: Mutex<Vec<AppendedRow>>,
}

/// A fake sheets server running in the background on an ephemeral port.
#[derive(Debug)]
pub struct SheetsTestServer {
    addr: SocketAddr,
    state: Arc<SheetsState>,
}

impl SheetsTestServer {
    /// The endpoint to configure as spreadsheets endpoint override.
    pub fn endpoint(&self) -> Url {
        Url::parse(&format!("http://{}{SPREADSHEETS_ROUTE}", self.addr))
            .expect("socket address forms a valid url")
    }

    /// All rows appended so far, in the order they were received.
    pub fn rows(&self) -> Vec<AppendedRow> {
        self.state
            .rows
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Binds the fake sheets server to `127.0.0.1` on a random port and serves
/// it in a background task.
pub async fn spawn(api_key: impl Into<String>) -> anyhow::Result<SheetsTestServer> {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .context("Failed to bind sheets testing server")?;
    let addr = listener.local_addr()?;

    let state = Arc::new(SheetsState {
        api_key: api_key.into(),
        rows: Default::default(),
    });

    let router = router(Arc::clone(&state));
    tokio::spawn(async move { axum::serve(listener, router).await });

    Ok(SheetsTestServer { addr, state })
}

pub async fn start_server(host: IpAddr, port: u16, api_key: String) -> anyhow::Result<()> {
    info!("Starting sheets testing server on {host}:{port}");
    info!("Spreadsheets endpoint: http://{host}:{port}{SPREADSHEETS_ROUTE}/");
    info!("API key: {api_key:?}");

    let state = Arc::new(SheetsState {
        api_key,
        rows: Default::default(),
    });

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router(state))
        .await
        .context("Failed to start HTTP server")
}

fn router(state: Arc<SheetsState>) -> Router<()> {
    Router::new()
        .route(
            &format!("{SPREADSHEETS_ROUTE}/:spreadsheet_id/values/:range"),
            routing::post(append),
        )
        .with_state(state)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendQuery {
    key: Option<String>,
    value_input_option: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendRequest {
    #[serde(default)]
    major_dimension: Option<String>,
    values: Vec<Vec<String>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppendResponse {
    spreadsheet_id: String,
    table_range: String,
    updates: AppendUpdates,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    spreadsheet_id: String,
    updated_range: String,
    updated_rows: usize,
    updated_columns: usize,
    updated_cells: usize,
}

async fn append(
    state: State<Arc<SheetsState>>,
    Path((spreadsheet_id, range)): Path<(String, String)>,
    Query(query): Query<AppendQuery>,
    Json(request): Json<AppendRequest>,
) -> Response {
    let Some(range) = range.strip_suffix(":append") else {
        return error(StatusCode::NOT_FOUND, "NOT_FOUND", "Unknown method");
    };

    if query.key.as_deref() != Some(state.api_key.as_str()) {
        return error(
            StatusCode::BAD_REQUEST,
            "INVALID_ARGUMENT",
            "API key not valid. Please pass a valid API key.",
        );
    }

    if !matches!(
        query.value_input_option.as_deref(),
        Some("RAW" | "USER_ENTERED")
    ) {
        return error(
            StatusCode::BAD_REQUEST,
            "INVALID_ARGUMENT",
            "Invalid valueInputOption",
        );
    }

    if request
        .major_dimension
        .as_deref()
        .is_some_and(|d| d != "ROWS")
    {
        return error(
            StatusCode::BAD_REQUEST,
            "INVALID_ARGUMENT",
            "Only majorDimension ROWS is supported",
        );
    }

    let updated_rows = request.values.len();
    let updated_columns = request.values.iter().map(Vec::len).max().unwrap_or(0);
    let updated_cells = request.values.iter().map(Vec::len).sum();

    state
        .rows
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .extend(request.values.into_iter().map(|values| AppendedRow {
            spreadsheet_id: spreadsheet_id.clone(),
            range: range.to_owned(),
            values,
        }));

    Json(AppendResponse {
        spreadsheet_id: spreadsheet_id.clone(),
        table_range: range.to_owned(),
        updates: AppendUpdates {
            spreadsheet_id,
            updated_range: range.to_owned(),
            updated_rows,
            updated_columns,
            updated_cells,
        },
    })
    .into_response()
}

fn error(code: StatusCode, status: &str, message: &str) -> Response {
    let body = json!({
        "error": {
            "code": code.as_u16(),
            "message": message,
            "status": status,
        }
    });
    (code, Json(body)).into_response()
}
