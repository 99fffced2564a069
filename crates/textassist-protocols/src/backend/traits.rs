//! Backend trait definitions.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::BackendError;

/// Result of the cheap capability probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// The backend exists and sessions may be created.
    Available,
    /// The backend is not present in this environment.
    Absent,
}

/// Options used when creating a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Fixed system prompt shared by every action.
    pub system_prompt: String,
    /// Expected input/output language tag, e.g. `"en"`.
    pub language: String,
}

impl SessionOptions {
    pub fn new(system_prompt: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            language: language.into(),
        }
    }
}

/// An on-device language model capability.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Returns the backend ID.
    fn id(&self) -> &str;

    /// Synchronous capability probe. Must not block or perform I/O.
    fn availability(&self) -> Availability;

    /// Create a new long-lived session.
    async fn create_session(
        &self,
        options: SessionOptions,
    ) -> Result<Arc<dyn ModelSession>, BackendError>;
}

/// A live session on a language model.
///
/// Sessions must tolerate concurrent prompts; callers add no locking.
#[async_trait]
pub trait ModelSession: Send + Sync {
    /// Send one prompt and return the model's full reply.
    async fn prompt(&self, input: &str) -> Result<String, BackendError>;
}
