//! Configuration validation.

use std::collections::HashSet;

use crate::error::ConfigError;
use crate::schema::{BackendKind, Config};

/// Timeouts above this are accepted but reported.
const LONG_TIMEOUT_MS: u64 = 60_000;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Turn the first error into a [`ConfigError`].
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, ConfigError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(ConfigError::InvalidValue {
                field: error.path,
                message: error.message,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_timing(config, &mut result);
        Self::validate_session(config, &mut result);
        Self::validate_backend(config, &mut result);
        Self::validate_settings(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }
    }

    fn validate_timing(config: &Config, result: &mut ValidationResult) {
        let timeouts = [
            ("engine.call_timeout_ms", config.engine.call_timeout_ms),
            ("session.init_timeout_ms", config.session.init_timeout_ms),
        ];

        for (path, value) in timeouts {
            if value == 0 {
                result.add_error(ValidationError::new(path, "must be greater than 0"));
            } else if value > LONG_TIMEOUT_MS {
                result.add_warning(ValidationWarning::new(
                    path,
                    format!("{} ms is very long; users will wait that long before the fallback", value),
                ));
            }
        }

        if config.engine.retry_delay_ms > LONG_TIMEOUT_MS {
            result.add_warning(ValidationWarning::new(
                "engine.retry_delay_ms",
                "retry delay is longer than a minute",
            ));
        }
    }

    fn validate_session(config: &Config, result: &mut ValidationResult) {
        if config.session.language.trim().is_empty() {
            result.add_error(ValidationError::new(
                "session.language",
                "Language tag cannot be empty",
            ));
        }

        if config.session.system_prompt.trim().is_empty() {
            result.add_warning(ValidationWarning::new(
                "session.system_prompt",
                "System prompt is empty, model replies may include explanations",
            ));
        }
    }

    fn validate_backend(config: &Config, result: &mut ValidationResult) {
        let backend = &config.backend;
        if backend.kind == BackendKind::None {
            result.add_warning(ValidationWarning::new(
                "backend.kind",
                "No backend configured, every action will use the offline rules",
            ));
            return;
        }

        if !backend.base_url.starts_with("http://") && !backend.base_url.starts_with("https://") {
            result.add_error(ValidationError::new(
                "backend.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if backend.model.trim().is_empty() {
            result.add_error(ValidationError::new("backend.model", "Model cannot be empty"));
        }

        if let Some(temperature) = backend.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                result.add_error(ValidationError::new(
                    "backend.temperature",
                    "temperature must be between 0.0 and 2.0",
                ));
            }
        }
    }

    fn validate_settings(config: &Config, result: &mut ValidationResult) {
        let settings = &config.settings;

        if settings.features.enabled_actions().is_empty() {
            result.add_warning(ValidationWarning::new(
                "settings.features",
                "All features are disabled, every request will be rejected",
            ));
        }

        if settings.languages.is_empty() {
            result.add_warning(ValidationWarning::new(
                "settings.languages",
                "Language list is empty, translation targets fall back to English",
            ));
        }

        let mut seen = HashSet::new();
        for language in &settings.languages {
            if language.code.trim().is_empty() {
                result.add_error(ValidationError::new(
                    "settings.languages",
                    format!("Language '{}' has an empty code", language.name),
                ));
                continue;
            }
            if !seen.insert(language.code.to_ascii_lowercase()) {
                result.add_error(ValidationError::new(
                    "settings.languages",
                    format!("Duplicate language code '{}'", language.code),
                ));
            }
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
