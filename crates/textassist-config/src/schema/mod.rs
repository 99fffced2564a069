//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use textassist_protocols::Settings;

mod schema_backend;
mod schema_engine;

pub use schema_backend::*;
pub use schema_engine::*;

/// Shared default helper used by submodules.
pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub backend: BackendConfig,

    /// User settings: feature switches and language list.
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8790
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Log directory. Defaults to `~/.textassist/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Write a daily-rotated log file in addition to the console.
    #[serde(default = "default_true")]
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
            file: default_true(),
        }
    }
}

impl LoggingConfig {
    /// Resolve the log directory, expanding `~`.
    pub fn resolved_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).to_string()),
            None => data_dir().join("logs"),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Per-user data directory (`~/.textassist`).
pub fn data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".textassist")
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
