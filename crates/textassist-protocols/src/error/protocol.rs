//! Message decoding errors.

use thiserror::Error;

/// Raised when an inbound message cannot be turned into an action request.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Invalid selection span: start {start} is after end {end}")]
    InvalidSpan { start: usize, end: usize },

    #[error("Malformed message: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_action() {
        let err = ProtocolError::UnknownAction("dance".to_string());
        assert!(err.to_string().contains("Unknown action"));
        assert!(err.to_string().contains("dance"));
    }

    #[test]
    fn test_invalid_span() {
        let err = ProtocolError::InvalidSpan { start: 9, end: 2 };
        let display = err.to_string();
        assert!(display.contains('9'));
        assert!(display.contains('2'));
    }

    #[test]
    fn test_serialization_error_from() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err = ProtocolError::from(json_err);
        assert!(err.to_string().contains("Serialization error"));
    }
}
