use super::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8790);
    assert_eq!(config.engine.call_timeout_ms, 10_000);
    assert_eq!(config.engine.retry_delay_ms, 1_000);
    assert_eq!(config.session.init_timeout_ms, 5_000);
    assert_eq!(config.session.language, "en");
    assert_eq!(config.backend.kind, BackendKind::OpenaiCompat);
}

#[test]
fn test_durations() {
    let engine = EngineConfig::default();
    assert_eq!(engine.call_timeout(), std::time::Duration::from_secs(10));
    assert_eq!(engine.retry_delay(), std::time::Duration::from_secs(1));
    assert_eq!(
        SessionConfig::default().init_timeout(),
        std::time::Duration::from_secs(5)
    );
}

#[test]
fn test_session_config_default_prompt() {
    let session = SessionConfig::default();
    assert_eq!(session.system_prompt, DEFAULT_SYSTEM_PROMPT);
    assert!(session.warm_up);
}

#[test]
fn test_backend_kind_serde() {
    let backend: BackendConfig = toml::from_str(r#"kind = "none""#).unwrap();
    assert_eq!(backend.kind, BackendKind::None);
    assert_eq!(backend.model, "llama3.2");
}

#[test]
fn test_logging_explicit_dir_expands_tilde() {
    let logging = LoggingConfig {
        dir: Some("~/logs".to_string()),
        ..Default::default()
    };
    let dir = logging.resolved_dir();
    assert!(!dir.to_string_lossy().starts_with('~'));
    assert!(dir.ends_with("logs"));
}

#[test]
fn test_logging_default_dir() {
    let dir = LoggingConfig::default().resolved_dir();
    assert!(dir.ends_with(".textassist/logs"));
}

#[test]
fn test_settings_section() {
    let config: Config = toml::from_str(
        r#"
        [settings.features]
        generate = false

        [[settings.languages]]
        code = "sv"
        name = "Swedish"
        displayGlyph = "🇸🇪"
        "#,
    )
    .unwrap();
    assert!(!config.settings.features.generate);
    assert!(config.settings.features.translate);
    assert_eq!(config.settings.languages.len(), 1);
    assert_eq!(config.settings.languages[0].display_glyph, "🇸🇪");
}
