//! Engine error types.
//!
//! These never leave the engine: every failure is turned into a fallback
//! result. They exist for logging and tests.

use thiserror::Error;

use textassist_protocols::{BackendError, SessionError};

use crate::deadline::DeadlineError;

/// Why the model-backed path did not produce text.
#[derive(Debug, Error)]
pub enum ModelFailure {
    #[error("session unavailable: {0}")]
    Session(#[from] SessionError),

    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("model call failed: {0}")]
    Deadline(#[from] DeadlineError),

    #[error("model returned blank text")]
    Blank,
}

impl ModelFailure {
    /// Short label used as a structured log field.
    pub fn label(&self) -> &'static str {
        match self {
            ModelFailure::Session(SessionError::CapabilityAbsent) => "capability_absent",
            ModelFailure::Session(SessionError::Timeout(_)) => "init_timeout",
            ModelFailure::Session(_) => "initialization_failure",
            ModelFailure::Backend(_) => "backend_error",
            ModelFailure::Deadline(DeadlineError::Elapsed(_)) => "timeout",
            ModelFailure::Deadline(DeadlineError::Aborted(_)) => "aborted",
            ModelFailure::Blank => "blank_reply",
        }
    }
}
