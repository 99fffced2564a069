//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the HTTP service.
///
/// ```text
/// POST /v1/actions        - Run an action message
/// GET  /v1/settings       - Current settings
/// PUT  /v1/settings       - Replace settings
/// POST /v1/session/reset  - Drop the model session
/// GET  /health            - Health and session status
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route("/actions", post(handlers::run_action))
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .route("/session/reset", post(handlers::reset_session))
        .with_state(state.clone());

    // Browser extensions call in from their own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/v1", api_routes)
        .route("/health", get(handlers::health))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
