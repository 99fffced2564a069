use super::*;

use std::time::Duration;

use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use textassist_protocols::{ReplyMessage, SessionOptions, Settings};
use textassist_runtime::{ActionEngine, ActionEngineConfig, SessionManager, UnavailableBackend};

use crate::http::handlers::HealthResponse;
use crate::router::RequestRouter;

fn create_test_state() -> Arc<AppState> {
    let sessions = Arc::new(SessionManager::new(
        Arc::new(UnavailableBackend),
        SessionOptions::new("system", "en"),
        Duration::from_secs(5),
    ));
    let engine = Arc::new(ActionEngine::new(sessions, ActionEngineConfig::default()));
    let router = Arc::new(RequestRouter::new(engine, Settings::default()));
    Arc::new(AppState::new(router))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_action_endpoint() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(post_json(
            "/v1/actions",
            r#"{"id":"r1","action":"proofread","text":"I recieve teh package"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let reply: ReplyMessage = body_json(response).await;
    let result = reply.as_result().unwrap();
    assert_eq!(result.id.as_deref(), Some("r1"));
    assert_eq!(result.result, "I receive the package");
    assert!(result.used_fallback);
}

#[tokio::test]
async fn test_action_endpoint_rejects_malformed() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(post_json("/v1/actions", "{ nope"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let reply: ReplyMessage = body_json(response).await;
    assert!(matches!(reply, ReplyMessage::Rejected { .. }));
}

#[tokio::test]
async fn test_settings_get_and_put() {
    let state = create_test_state();
    let app = create_router(state.clone());

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/v1/settings").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mut settings: Settings = body_json(response).await;
    assert!(settings.features.translate);
    assert!(!settings.languages.is_empty());

    settings.features.translate = false;
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/v1/settings")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&settings).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(!state.router.settings().features.translate);

    let response = app
        .oneshot(post_json(
            "/v1/actions",
            r#"{"action":"translate","text":"hi","targetLanguage":"fr"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_health_endpoint() {
    let state = create_test_state();
    state.increment_requests();
    let app = create_router(state);

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = body_json(response).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.backend, "unavailable");
    assert_eq!(health.requests, 1);
    assert_eq!(health.session, textassist_runtime::SessionStatus::Idle);
}

#[tokio::test]
async fn test_session_reset_endpoint() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(post_json("/v1/session/reset", ""))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_router(create_test_state());
    let response = app
        .oneshot(Request::builder().uri("/v1/nothing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
