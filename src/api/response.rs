//! JSON response encoding
//!
//! Every handler funnels its payload through [`respond_ok`]. A payload that
//! fails to serialize turns into a 500 with an `{"error": ...}` body.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error envelope returned with a 500.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serialize `payload` and answer 200, or 500 if serialization fails.
pub fn respond_ok<T: Serialize>(payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => json_response(StatusCode::OK, bytes),
        Err(err) => respond_internal_error(&err),
    }
}

/// Answer 500 with `err` wrapped in an [`ErrorResponse`].
///
/// Failing to encode the error envelope itself terminates the process.
pub fn respond_internal_error(err: &dyn std::fmt::Display) -> Response {
    tracing::error!(error = %err, "Failed to encode response");

    let envelope = ErrorResponse {
        error: err.to_string(),
    };

    match serde_json::to_vec(&envelope) {
        Ok(bytes) => json_response(StatusCode::INTERNAL_SERVER_ERROR, bytes),
        Err(fatal) => {
            tracing::error!(error = %fatal, "Failed to encode error response, exiting");
            std::process::exit(1);
        }
    }
}

fn json_response(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Body::from(bytes),
    )
        .into_response()
}
