use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiFieldError, ApiInvalidRequest};

pub mod contact;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

pub async fn not_found() -> Response {
    error(StatusCode::NOT_FOUND, "Not found")
}

fn invalid_request(errors: Vec<ApiFieldError>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiInvalidRequest {
            message: "Invalid request",
            errors,
        }),
    )
        .into_response()
}

fn error(code: StatusCode, message: &'static str) -> Response {
    (code, Json(ApiError { message })).into_response()
}
