use serde::Serialize;

pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub message: &'static str,
}

/// Response to a request whose payload failed validation.
#[derive(Serialize)]
pub struct ApiInvalidRequest {
    pub message: &'static str,
    pub errors: Vec<ApiFieldError>,
}

/// A single violated constraint. `path` locates the offending value in the
/// request body and is empty if the body as a whole is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFieldError {
    pub path: Vec<&'static str>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ApiData<T> {
    pub data: T,
}
