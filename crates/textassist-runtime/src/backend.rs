//! Built-in backends.

use std::sync::Arc;

use async_trait::async_trait;

use textassist_protocols::{
    Availability, BackendError, LanguageModel, ModelSession, SessionOptions,
};

/// Backend used when no model is configured. Always reports itself absent,
/// so the engine goes straight to the offline rules.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableBackend;

#[async_trait]
impl LanguageModel for UnavailableBackend {
    fn id(&self) -> &str {
        "unavailable"
    }

    fn availability(&self) -> Availability {
        Availability::Absent
    }

    async fn create_session(
        &self,
        _options: SessionOptions,
    ) -> Result<Arc<dyn ModelSession>, BackendError> {
        Err(BackendError::NotSupported(
            "no language model backend is configured".to_string(),
        ))
    }
}
