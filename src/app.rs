//! Component wiring from a loaded [`Config`].

use std::sync::Arc;

use tracing::info;

use textassist_api::RequestRouter;
use textassist_backend_openai::{OpenAiCompatBackend, OpenAiCompatConfig};
use textassist_config::{BackendKind, Config};
use textassist_protocols::{LanguageModel, SessionOptions};
use textassist_runtime::{ActionEngine, ActionEngineConfig, SessionManager, UnavailableBackend};

/// Everything the transports need.
pub(crate) struct App {
    pub router: Arc<RequestRouter>,
    pub sessions: Arc<SessionManager>,
}

impl App {
    pub fn build(config: &Config) -> Self {
        let backend = build_backend(config);
        info!(backend = backend.id(), "Language model backend selected");

        let options = SessionOptions::new(
            config.session.system_prompt.clone(),
            config.session.language.clone(),
        );
        let sessions = Arc::new(SessionManager::new(
            backend,
            options,
            config.session.init_timeout(),
        ));

        let engine = Arc::new(ActionEngine::new(
            Arc::clone(&sessions),
            ActionEngineConfig {
                call_timeout: config.engine.call_timeout(),
                retry_delay: config.engine.retry_delay(),
            },
        ));

        let router = Arc::new(RequestRouter::new(engine, config.settings.clone()));
        Self { router, sessions }
    }

    /// Start creating the session in the background when configured to.
    pub fn warm_up(&self, config: &Config) {
        if config.session.warm_up {
            let _ = self.sessions.spawn_warm_up();
        }
    }
}

fn build_backend(config: &Config) -> Arc<dyn LanguageModel> {
    match config.backend.kind {
        BackendKind::None => Arc::new(UnavailableBackend),
        BackendKind::OpenaiCompat => {
            let backend = &config.backend;
            let openai = OpenAiCompatConfig {
                base_url: backend.base_url.clone(),
                model: backend.model.clone(),
                api_key: backend.api_key.clone(),
                temperature: backend.temperature,
                max_tokens: backend.max_tokens,
                // The engine and session deadlines are the real bounds.
                request_timeout: config
                    .engine
                    .call_timeout()
                    .max(config.session.init_timeout()),
            };
            Arc::new(OpenAiCompatBackend::new(openai))
        }
    }
}
