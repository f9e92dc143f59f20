//! HTTP API server

use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

pub mod handlers;
pub mod response;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state.
///
/// Paths match exactly and every method is accepted. Anything else falls
/// through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::index))
        .route("/unicorn", any(handlers::get_unicorn))
        .route("/health", any(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
