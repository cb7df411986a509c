// ABOUTME: Shared API error bodies and storage-error mapping
// ABOUTME: Every JSON error response carries a lowercase `error` key

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;

use swatchbook_storage::StorageError;

/// JSON error body
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorBody {
            error: message.into(),
        }
    }
}

/// Build an error response with the given status and `{error}` body
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, ResponseJson(ErrorBody::new(message))).into_response()
}

/// Map an unexpected storage failure to 500 with the underlying message
pub fn internal_error(err: StorageError) -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}
