//! Text action engine.
//!
//! Runs one action over one piece of text. The model-backed path is tried
//! first under a deadline; any failure routes to the action's offline
//! fallback. `run` always produces an [`ActionResult`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use textassist_protocols::{ActionRequest, ActionResult, ModelSession, SessionError};

use crate::action::ResolvedAction;
use crate::deadline::Deadline;
use crate::error::ModelFailure;
use crate::fallback;
use crate::prompts;
use crate::session::SessionManager;

/// Engine timing.
#[derive(Debug, Clone)]
pub struct ActionEngineConfig {
    /// Ceiling for a single prompt call. The whole model attempt shares one
    /// `call_timeout + retry_delay` budget, so time spent creating the session
    /// shortens the prompt's effective ceiling.
    pub call_timeout: Duration,
    /// Wait before the one retry of an unready session.
    pub retry_delay: Duration,
}

impl Default for ActionEngineConfig {
    fn default() -> Self {
        Self {
            call_timeout: Duration::from_secs(10),
            retry_delay: Duration::from_secs(1),
        }
    }
}

impl ActionEngineConfig {
    /// Upper bound on the whole model-backed attempt.
    pub fn overall_budget(&self) -> Duration {
        self.call_timeout + self.retry_delay
    }
}

/// Lifecycle of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Pending,
    ParamsInvalid,
    ModelAttempt,
    ModelSucceeded,
    ModelFailed,
    FallbackApplied,
    Completed,
}

impl RequestState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestState::Completed)
    }
}

pub struct ActionEngine {
    sessions: Arc<SessionManager>,
    config: ActionEngineConfig,
}

impl ActionEngine {
    pub fn new(sessions: Arc<SessionManager>, config: ActionEngineConfig) -> Self {
        Self { sessions, config }
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    pub fn config(&self) -> &ActionEngineConfig {
        &self.config
    }

    /// Run `request` to completion.
    pub async fn run(&self, request: ActionRequest) -> ActionResult {
        self.run_traced(request).await.0
    }

    /// Run `request`, also returning the states it passed through.
    pub async fn run_traced(&self, request: ActionRequest) -> (ActionResult, Vec<RequestState>) {
        let kind = request.action();
        let mut trace = vec![RequestState::Pending];

        let (action, substituted) = ResolvedAction::resolve(&request.parameters);
        if let Some(reason) = substituted {
            warn!(action = %kind, %reason, "Invalid action parameters, using default");
            trace.push(RequestState::ParamsInvalid);
        }

        if request.text.trim().is_empty() {
            debug!(action = %kind, "Blank input, nothing to transform");
            trace.push(RequestState::Completed);
            let result = ActionResult {
                action: kind,
                result_text: request.text.clone(),
                original_text: request.text,
                origin: request.origin,
                used_fallback: false,
                notice: None,
            };
            return (result, trace);
        }

        trace.push(RequestState::ModelAttempt);
        let budget = Deadline::new(self.config.overall_budget());
        let outcome = budget
            .run(self.attempt_model(&action, &request.text))
            .await
            .unwrap_or_else(|elapsed| Err(ModelFailure::from(elapsed)));

        let (text, used_fallback) = match outcome {
            Ok(text) => {
                trace.push(RequestState::ModelSucceeded);
                debug!(action = %kind, chars = text.chars().count(), "Model path succeeded");
                (text, false)
            }
            Err(failure) => {
                trace.push(RequestState::ModelFailed);
                warn!(
                    action = %kind,
                    reason = failure.label(),
                    error = %failure,
                    "Model path failed, applying fallback"
                );
                let text = fallback::apply(&action, &request.text);
                trace.push(RequestState::FallbackApplied);
                (text, true)
            }
        };

        let result_text = if text.trim().is_empty() {
            request.text.clone()
        } else {
            text
        };
        trace.push(RequestState::Completed);
        info!(action = %kind, used_fallback, "Action completed");

        let result = ActionResult {
            action: kind,
            original_text: request.text,
            result_text,
            origin: request.origin,
            used_fallback,
            notice: used_fallback.then(|| fallback::notice(kind).to_string()),
        };
        (result, trace)
    }

    async fn attempt_model(
        &self,
        action: &ResolvedAction,
        text: &str,
    ) -> Result<String, ModelFailure> {
        let session = self.acquire_session().await?;
        let prompt = prompts::build(action, text);

        let call = Deadline::new(self.config.call_timeout);
        let reply = call
            .run_detached(async move { session.prompt(&prompt).await })
            .await??;

        let cleaned = prompts::clean_reply(action, &reply);
        if cleaned.is_empty() {
            return Err(ModelFailure::Blank);
        }
        Ok(cleaned)
    }

    /// Acquire the session, retrying once after `retry_delay` unless the
    /// capability is absent.
    async fn acquire_session(&self) -> Result<Arc<dyn ModelSession>, SessionError> {
        match self.sessions.acquire().await {
            Ok(session) => Ok(session),
            Err(e) if e.is_retryable() => {
                debug!(
                    error = %e,
                    delay_ms = self.config.retry_delay.as_millis() as u64,
                    "Session not ready, retrying once"
                );
                tokio::time::sleep(self.config.retry_delay).await;
                self.sessions.acquire().await
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
