//! Language model backend configuration.

use serde::{Deserialize, Serialize};

/// Which backend implementation to wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// A local OpenAI-compatible chat completions server.
    #[default]
    OpenaiCompat,
    /// No backend; every action uses the rule-based fallback.
    None,
}

/// Backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub kind: BackendKind,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            kind: BackendKind::default(),
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:11434/v1".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}
