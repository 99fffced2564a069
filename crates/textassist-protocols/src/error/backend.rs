//! Language model backend errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend reports it cannot run in this environment.
    #[error("Backend not supported: {0}")]
    NotSupported(String),

    /// The backend gave up after repeated crashes.
    #[error("Backend crashed: {0}")]
    Crashed(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Backend returned an empty response")]
    EmptyResponse,

    #[error("Timeout after {0} ms")]
    Timeout(u64),
}

impl BackendError {
    /// Whether the backend reported a permanent capability downgrade.
    pub fn is_degradation(&self) -> bool {
        matches!(self, BackendError::NotSupported(_) | BackendError::Crashed(_))
    }
}
