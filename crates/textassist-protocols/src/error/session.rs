//! Session lifecycle errors.

use thiserror::Error;

use super::BackendError;

/// Why a model session could not be made ready.
///
/// Clonable so a single in-flight initialisation can hand the same outcome
/// to every caller waiting on it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The backend is not present at all. Retrying will not help.
    #[error("Language model capability is absent")]
    CapabilityAbsent,

    #[error("Session initialization failed: {0}")]
    InitializationFailed(String),

    /// The backend reported a permanent downgrade while creating the session.
    #[error("Backend degraded: {0}")]
    Degraded(String),

    #[error("Session initialization timed out after {0} ms")]
    Timeout(u64),
}

impl SessionError {
    /// Whether a later attempt could succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SessionError::CapabilityAbsent)
    }
}

impl From<BackendError> for SessionError {
    fn from(err: BackendError) -> Self {
        if err.is_degradation() {
            SessionError::Degraded(err.to_string())
        } else {
            SessionError::InitializationFailed(err.to_string())
        }
    }
}
