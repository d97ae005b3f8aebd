use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use portfolio_core_contact_contracts::{ContactFeatureService, ContactSubmitError};

use super::{internal_server_error, invalid_request};
use crate::models::{
    contact::{ApiContactMessage, ApiContactSubmitted},
    ApiData, ApiFieldError,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(
            "/api/contact",
            routing::get(list_messages).post(submit_message),
        )
        .with_state(service)
}

async fn list_messages(service: State<Arc<impl ContactFeatureService>>) -> Response {
    match service.list_messages().await {
        Ok(messages) => Json(ApiData {
            data: messages
                .into_iter()
                .map(ApiContactMessage::from)
                .collect::<Vec<_>>(),
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

async fn submit_message(
    service: State<Arc<impl ContactFeatureService>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Response {
    let payload = match payload {
        Ok(Json(payload)) => payload,
        Err(rejection) => {
            return invalid_request(vec![ApiFieldError {
                path: Vec::new(),
                message: rejection.body_text(),
            }])
        }
    };

    match service.submit_message(payload).await {
        Ok(message) => (
            StatusCode::CREATED,
            Json(ApiContactSubmitted {
                success: true,
                message: "Message saved successfully",
                data: message.into(),
            }),
        )
            .into_response(),
        Err(ContactSubmitError::Invalid(errors)) => {
            invalid_request(errors.into_iter().map(Into::into).collect())
        }
        Err(ContactSubmitError::StoreFull) => {
            internal_server_error(anyhow!("contact message store is full"))
        }
        Err(ContactSubmitError::Other(err)) => internal_server_error(err),
    }
}
