//! API error types.

use thiserror::Error;
use tokio_util::codec::LinesCodecError;

use textassist_protocols::{ActionKind, ProtocolError};

/// Why a message was rejected before reaching the engine.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Action '{0}' is disabled in settings")]
    FeatureDisabled(ActionKind),
}

/// Transport failures of the stdio message host.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line framing error: {0}")]
    Lines(#[from] LinesCodecError),

    #[error("Message is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Writer task failed: {0}")]
    Writer(String),
}

impl HostError {
    /// Whether reading can continue with the next message.
    pub fn is_resumable(&self) -> bool {
        matches!(self, HostError::Lines(_) | HostError::Utf8(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_disabled_display() {
        let err = RouterError::FeatureDisabled(ActionKind::ChangeTone);
        assert_eq!(err.to_string(), "Action 'changeTone' is disabled in settings");
    }

    #[test]
    fn test_protocol_error_is_transparent() {
        let err = RouterError::from(ProtocolError::UnknownAction("dance".to_string()));
        assert!(err.to_string().contains("dance"));
    }

    #[test]
    fn test_host_error_display() {
        let err = HostError::Writer("closed".to_string());
        assert!(err.to_string().contains("closed"));
    }

    #[test]
    fn test_host_error_resumable() {
        assert!(HostError::Lines(LinesCodecError::MaxLineLengthExceeded).is_resumable());
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "frame size too big");
        assert!(!HostError::Io(io).is_resumable());
    }
}
