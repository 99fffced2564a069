use super::*;

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use textassist_protocols::{
    Availability, BackendError, LanguageModel, ModelSession, SessionOptions,
};
use textassist_runtime::{ActionEngineConfig, SessionManager, UnavailableBackend};

struct FixedSession(&'static str);

#[async_trait]
impl ModelSession for FixedSession {
    async fn prompt(&self, _input: &str) -> Result<String, BackendError> {
        Ok(self.0.to_string())
    }
}

struct FixedBackend(&'static str);

#[async_trait]
impl LanguageModel for FixedBackend {
    fn id(&self) -> &str {
        "fixed"
    }

    fn availability(&self) -> Availability {
        Availability::Available
    }

    async fn create_session(
        &self,
        _options: SessionOptions,
    ) -> Result<Arc<dyn ModelSession>, BackendError> {
        Ok(Arc::new(FixedSession(self.0)))
    }
}

fn router_with(backend: Arc<dyn LanguageModel>, settings: Settings) -> RequestRouter {
    let sessions = Arc::new(SessionManager::new(
        backend,
        SessionOptions::new("system", "en"),
        Duration::from_secs(5),
    ));
    let engine = Arc::new(ActionEngine::new(sessions, ActionEngineConfig::default()));
    RequestRouter::new(engine, settings)
}

fn offline_router() -> RequestRouter {
    router_with(Arc::new(UnavailableBackend), Settings::default())
}

#[tokio::test]
async fn test_result_mirrors_request() {
    let router = router_with(Arc::new(FixedBackend("Bonjour")), Settings::default());
    let message: RequestMessage = serde_json::from_value(json!({
        "id": "req-7",
        "action": "translate",
        "text": "Hello",
        "targetLanguage": "fr",
        "isRightClick": true,
        "position": {"x": 10, "y": 20}
    }))
    .unwrap();

    let reply = router.dispatch(message).await;
    let result = reply.as_result().expect("result reply");
    assert_eq!(result.id.as_deref(), Some("req-7"));
    assert_eq!(result.result, "Bonjour");
    assert_eq!(result.original_text, "Hello");
    assert_eq!(result.target_language.as_deref(), Some("fr"));
    assert_eq!(result.language_name.as_deref(), Some("French"));
    assert!(result.is_right_click);
    assert_eq!(result.position, Some(json!({"x": 10, "y": 20})));
    assert!(!result.used_fallback);
}

#[tokio::test]
async fn test_translate_unavailable() {
    let router = offline_router();
    let reply = router
        .dispatch_json(r#"{"action":"translate","text":"Good night","targetLanguage":"de"}"#)
        .await;

    let result = reply.as_result().expect("result reply");
    assert_eq!(result.result, "Good night");
    assert!(result.used_fallback);
    assert_eq!(
        result.notice.as_deref(),
        Some("Translation is unavailable right now. Please try again.")
    );
}

#[tokio::test]
async fn test_disabled_feature_is_rejected() {
    let mut settings = Settings::default();
    settings.features.summarize = false;
    let router = router_with(Arc::new(UnavailableBackend), settings);

    let reply = router
        .dispatch_json(r#"{"id":"a1","action":"summarize","text":"One. Two. Three."}"#)
        .await;
    match reply {
        ReplyMessage::Rejected { id, action, reason } => {
            assert_eq!(id.as_deref(), Some("a1"));
            assert_eq!(action.as_deref(), Some("summarize"));
            assert!(reason.contains("disabled"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_action_is_rejected() {
    let router = offline_router();
    let reply = router
        .dispatch_json(r#"{"id":"x","action":"dance","text":"hi"}"#)
        .await;
    assert!(matches!(reply, ReplyMessage::Rejected { .. }));
    assert_eq!(reply.id(), Some("x"));
}

#[tokio::test]
async fn test_malformed_json_salvages_id() {
    let router = offline_router();
    let reply = router.dispatch_json(r#"{"id":"m1","text":42}"#).await;
    assert!(matches!(reply, ReplyMessage::Rejected { action: None, .. }));
    assert_eq!(reply.id(), Some("m1"));

    let reply = router.dispatch_json("not json at all").await;
    assert_eq!(reply.id(), None);
}

#[tokio::test]
async fn test_inverted_span_is_rejected() {
    let router = offline_router();
    let reply = router
        .dispatch_json(
            r#"{"action":"proofread","text":"teh","isInputField":true,"textStart":9,"textEnd":2}"#,
        )
        .await;
    assert!(matches!(reply, ReplyMessage::Rejected { .. }));
}

#[tokio::test]
async fn test_unknown_tone_still_produces_result() {
    let router = offline_router();
    let reply = router
        .dispatch_json(r#"{"action":"changeTone","text":"I can't go!","tone":"sarcastic"}"#)
        .await;
    let result = reply.as_result().expect("result reply");
    assert_eq!(result.result, "I cannot go.");
    assert_eq!(result.tone.as_deref(), Some("sarcastic"));
}

#[tokio::test]
async fn test_update_settings() {
    let router = offline_router();
    let mut settings = router.settings();
    settings.features.generate = false;
    router.update_settings(settings);

    assert!(!router.settings().features.generate);
    let reply = router
        .dispatch_json(r#"{"action":"generate","text":"an email"}"#)
        .await;
    assert!(matches!(reply, ReplyMessage::Rejected { .. }));
}
