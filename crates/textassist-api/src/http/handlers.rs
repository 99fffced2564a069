//! HTTP handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use textassist_protocols::{ReplyMessage, Settings};
use textassist_runtime::SessionStatus;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub requests: u64,
    pub backend: String,
    pub session: SessionStatus,
}

/// Session reset response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub session: SessionStatus,
}

/// Run one action.
///
/// POST /v1/actions
///
/// The body is taken as raw text so malformed messages get the same
/// `rejected` reply as on the stdio host.
pub async fn run_action(State(state): State<Arc<AppState>>, body: String) -> impl IntoResponse {
    state.increment_requests();
    let reply = state.router.dispatch_json(&body).await;
    let status = match reply {
        ReplyMessage::Result(_) => StatusCode::OK,
        ReplyMessage::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, Json(reply))
}

/// GET /v1/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.router.settings())
}

/// PUT /v1/settings
pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<Settings>,
) -> Json<Settings> {
    info!(
        enabled = settings.features.enabled_actions().len(),
        languages = settings.languages.len(),
        "Settings replaced"
    );
    state.router.update_settings(settings);
    Json(state.router.settings())
}

/// POST /v1/session/reset
pub async fn reset_session(State(state): State<Arc<AppState>>) -> Json<ResetResponse> {
    let sessions = state.router.engine().sessions();
    sessions.reset();
    Json(ResetResponse {
        session: sessions.status(),
    })
}

/// GET /health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let sessions = state.router.engine().sessions();
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        started_at: state.started_at(),
        requests: state.request_count(),
        backend: sessions.backend_id().to_string(),
        session: sessions.status(),
    })
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
