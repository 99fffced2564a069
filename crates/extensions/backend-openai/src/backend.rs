//! Backend and session implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use textassist_protocols::{
    Availability, BackendError, LanguageModel, ModelSession, SessionOptions,
};

use crate::api::{ChatMessage, ChatRequest, ChatResponse, ModelList};

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:11434/v1";
const DEFAULT_MODEL: &str = "llama3.2";

/// Connection settings for an OpenAI-compatible server.
#[derive(Debug, Clone)]
pub struct OpenAiCompatConfig {
    /// API root, e.g. `http://127.0.0.1:11434/v1`.
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// Transport-level ceiling per HTTP request.
    pub request_timeout: Duration,
}

impl Default for OpenAiCompatConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            temperature: None,
            max_tokens: None,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl OpenAiCompatConfig {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

pub struct OpenAiCompatBackend {
    config: Arc<OpenAiCompatConfig>,
    client: reqwest::Client,
}

impl OpenAiCompatBackend {
    pub fn new(config: OpenAiCompatConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &OpenAiCompatConfig {
        &self.config
    }

    /// Check that the server answers and serves the configured model.
    ///
    /// Servers that do not implement `/models` in the standard shape are
    /// accepted as long as they answer successfully.
    async fn probe(&self) -> Result<(), BackendError> {
        let url = self.config.endpoint("models");
        let response = authorize(self.client.get(&url), &self.config)
            .timeout(self.config.request_timeout)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.config.request_timeout))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<ModelList>().await {
            Ok(list) if !list.data.is_empty() && !list.contains(&self.config.model) => {
                Err(BackendError::NotSupported(format!(
                    "model '{}' is not served at {}",
                    self.config.model, self.config.base_url
                )))
            }
            Ok(_) => Ok(()),
            Err(e) => {
                debug!(error = %e, "Model listing not understood, skipping model check");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl LanguageModel for OpenAiCompatBackend {
    fn id(&self) -> &str {
        "openai_compat"
    }

    fn availability(&self) -> Availability {
        if self.config.base_url.trim().is_empty() || self.config.model.trim().is_empty() {
            Availability::Absent
        } else {
            Availability::Available
        }
    }

    async fn create_session(
        &self,
        options: SessionOptions,
    ) -> Result<Arc<dyn ModelSession>, BackendError> {
        self.probe().await?;
        debug!(model = %self.config.model, base_url = %self.config.base_url, "Model server reachable");

        Ok(Arc::new(OpenAiCompatSession {
            config: Arc::clone(&self.config),
            client: self.client.clone(),
            system_prompt: system_prompt(&options),
        }))
    }
}

/// A chat session. The server is stateless, so a session only carries the
/// system prompt sent with every request.
pub struct OpenAiCompatSession {
    config: Arc<OpenAiCompatConfig>,
    client: reqwest::Client,
    system_prompt: String,
}

#[async_trait]
impl ModelSession for OpenAiCompatSession {
    async fn prompt(&self, input: &str) -> Result<String, BackendError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage::system(&self.system_prompt),
                ChatMessage::user(input),
            ],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            stream: false,
        };

        let url = self.config.endpoint("chat/completions");
        let response = authorize(self.client.post(&url), &self.config)
            .timeout(self.config.request_timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| map_transport_error(e, self.config.request_timeout))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Model server returned an error");
            return Err(BackendError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        match body.into_text() {
            Some(text) if !text.trim().is_empty() => Ok(text),
            _ => Err(BackendError::EmptyResponse),
        }
    }
}

fn authorize(builder: reqwest::RequestBuilder, config: &OpenAiCompatConfig) -> reqwest::RequestBuilder {
    match config.api_key.as_deref().filter(|key| !key.is_empty()) {
        Some(key) => builder.bearer_auth(key),
        None => builder,
    }
}

fn map_transport_error(e: reqwest::Error, timeout: Duration) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout(timeout.as_millis() as u64)
    } else {
        BackendError::Network(e.to_string())
    }
}

fn system_prompt(options: &SessionOptions) -> String {
    if options.language.trim().is_empty() {
        options.system_prompt.clone()
    } else {
        format!(
            "{}\nUnless asked otherwise, answer in the language tagged \"{}\".",
            options.system_prompt, options.language
        )
    }
}

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
