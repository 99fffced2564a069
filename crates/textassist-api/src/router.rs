//! Request routing.
//!
//! Turns wire messages into engine calls. Rejections happen here, before
//! the engine is involved: malformed messages, unknown actions and actions
//! switched off in settings. Anything accepted resolves to a result.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{Instrument, debug, info_span, warn};
use uuid::Uuid;

use textassist_protocols::{
    ActionKind, ActionRequest, ReplyMessage, RequestMessage, ResultMessage, Settings,
};
use textassist_runtime::ActionEngine;

use crate::error::RouterError;

/// Settings shared between the router and whatever edits them.
pub type SharedSettings = Arc<RwLock<Settings>>;

pub struct RequestRouter {
    engine: Arc<ActionEngine>,
    settings: SharedSettings,
}

impl RequestRouter {
    pub fn new(engine: Arc<ActionEngine>, settings: Settings) -> Self {
        Self::with_shared_settings(engine, Arc::new(RwLock::new(settings)))
    }

    pub fn with_shared_settings(engine: Arc<ActionEngine>, settings: SharedSettings) -> Self {
        Self { engine, settings }
    }

    pub fn engine(&self) -> &Arc<ActionEngine> {
        &self.engine
    }

    /// Snapshot of the current settings.
    pub fn settings(&self) -> Settings {
        self.settings.read().clone()
    }

    pub fn update_settings(&self, settings: Settings) {
        *self.settings.write() = settings;
    }

    /// Validate `message` against the protocol and the feature switches.
    ///
    /// A missing translation language name is filled from the configured
    /// language list.
    pub fn prepare(&self, message: &mut RequestMessage) -> Result<ActionRequest, RouterError> {
        let kind = message.kind()?;
        let settings = self.settings.read();
        if !settings.features.is_enabled(kind) {
            return Err(RouterError::FeatureDisabled(kind));
        }

        if kind == ActionKind::Translate && message.language_name.is_none() {
            if let Some(code) = message.target_language.as_deref() {
                message.language_name = settings.language(code).map(|l| l.name.clone());
            }
        }
        drop(settings);

        Ok(message.to_request()?)
    }

    /// Dispatch one parsed message.
    pub async fn dispatch(&self, mut message: RequestMessage) -> ReplyMessage {
        let correlation = message
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let span = info_span!("request", id = %correlation, action = %message.action);

        async move {
            let request = match self.prepare(&mut message) {
                Ok(request) => request,
                Err(e) => {
                    warn!(error = %e, "Rejecting request");
                    return ReplyMessage::rejected(
                        message.id.clone(),
                        Some(message.action.clone()),
                        e.to_string(),
                    );
                }
            };

            debug!(chars = request.text.chars().count(), "Dispatching to engine");
            let result = self.engine.run(request).await;
            ReplyMessage::Result(ResultMessage::mirror(&message, result))
        }
        .instrument(span)
        .await
    }

    /// Parse and dispatch a raw JSON message.
    pub async fn dispatch_json(&self, raw: &str) -> ReplyMessage {
        match RequestMessage::from_json(raw) {
            Ok(message) => self.dispatch(message).await,
            Err(e) => {
                warn!(error = %e, "Rejecting malformed message");
                ReplyMessage::rejected(salvage_id(raw), None, e.to_string())
            }
        }
    }
}

/// Best-effort recovery of the correlation id from a message that failed
/// to parse as a request.
fn salvage_id(raw: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    value.get("id")?.as_str().map(str::to_string)
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
