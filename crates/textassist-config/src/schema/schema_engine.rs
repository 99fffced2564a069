//! Engine and session timing configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::default_true;

/// System prompt sent once when the model session is created.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a writing assistant embedded in a web page text field. \
Follow each instruction exactly and reply with the resulting text only. \
Do not add explanations, quotes, headings or markdown formatting.";

/// Text action engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ceiling for a single model prompt.
    #[serde(default = "default_call_timeout_ms")]
    pub call_timeout_ms: u64,

    /// Delay before the single session retry.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: default_call_timeout_ms(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl EngineConfig {
    pub fn call_timeout(&self) -> Duration {
        Duration::from_millis(self.call_timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn default_call_timeout_ms() -> u64 {
    10_000
}

fn default_retry_delay_ms() -> u64 {
    1_000
}

/// Model session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Ceiling for session creation.
    #[serde(default = "default_init_timeout_ms")]
    pub init_timeout_ms: u64,

    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Language tag passed to the backend.
    #[serde(default = "default_language")]
    pub language: String,

    /// Create the session at startup instead of on first use.
    #[serde(default = "default_true")]
    pub warm_up: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            init_timeout_ms: default_init_timeout_ms(),
            system_prompt: default_system_prompt(),
            language: default_language(),
            warm_up: default_true(),
        }
    }
}

impl SessionConfig {
    pub fn init_timeout(&self) -> Duration {
        Duration::from_millis(self.init_timeout_ms)
    }
}

fn default_init_timeout_ms() -> u64 {
    5_000
}

fn default_system_prompt() -> String {
    DEFAULT_SYSTEM_PROMPT.to_string()
}

fn default_language() -> String {
    "en".to_string()
}
