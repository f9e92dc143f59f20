//! API handlers
//!
//! None of the handlers look at the request: method, headers, query and body
//! are all ignored.

use axum::{extract::State, response::Response};
use serde::Serialize;

use crate::api::response::{respond_internal_error, respond_ok};
use crate::api::AppState;
use crate::creature::Creature;

/// Greeting with the local host name
pub async fn index() -> Response {
    respond_ok(&IndexResponse {
        message: "Hello".to_string(),
        hostname: local_hostname(),
    })
}

#[derive(Debug, Serialize)]
pub struct IndexResponse {
    pub message: String,
    pub hostname: String,
}

/// Liveness probe
pub async fn health() -> Response {
    respond_ok(&HealthResponse {
        status: "OK".to_string(),
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    #[serde(rename = "message")]
    pub status: String,
}

/// Generate a random unicorn
pub async fn get_unicorn(State(state): State<AppState>) -> Response {
    match Creature::generate(&state.selector) {
        Ok(unicorn) => respond_ok(&UnicornResponse { unicorn }),
        Err(err) => respond_internal_error(&err),
    }
}

#[derive(Debug, Serialize)]
pub struct UnicornResponse {
    pub unicorn: Creature,
}

/// Host name of this machine, or an empty string when it cannot be read.
pub fn local_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_default()
}
