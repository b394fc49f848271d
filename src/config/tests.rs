//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed = Config::parse_file_config(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
}

#[test]
fn test_config_roundtrip_preserves_values() {
    let mut config = Config::default();
    config.api_url = "https://contacts.example.com".to_string();
    config.request_timeout_secs = 3;
    config.button_label = "Salvar alterações".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let file = Config::parse_file_config(&config.to_toml()).unwrap();
    let resolved = Config::resolve(file, env_from(&[]));

    assert_eq!(resolved.api_url, "https://contacts.example.com");
    assert_eq!(resolved.request_timeout_secs, 3);
    assert_eq!(resolved.button_label, "Salvar alterações");
    assert!(resolved.logging.file_enabled);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Hourly);
}

#[test]
fn test_env_overrides_file() {
    let file = Config::parse_file_config(
        r#"
api_url = "http://from-file:3001"
request_timeout_secs = 30
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("MYCONTACTS_API_URL", "http://from-env:4000"),
            ("MYCONTACTS_TIMEOUT_SECS", "5"),
        ]),
    );

    assert_eq!(config.api_url, "http://from-env:4000");
    assert_eq!(config.request_timeout_secs, 5);
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = Config::parse_file_config("").unwrap();
    let config = Config::resolve(file, env_from(&[]));

    assert_eq!(config.api_url, "http://localhost:3001");
    assert_eq!(config.button_label, "Cadastrar");
    assert!(config.enable_tui);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_no_tui_flag() {
    let file = FileConfig::default();
    assert!(!Config::resolve(file, env_from(&[("MYCONTACTS_NO_TUI", "1")])).enable_tui);

    let file = FileConfig::default();
    assert!(!Config::resolve(file, env_from(&[("MYCONTACTS_NO_TUI", "TRUE")])).enable_tui);

    let file = FileConfig::default();
    assert!(Config::resolve(file, env_from(&[("MYCONTACTS_NO_TUI", "0")])).enable_tui);
}

#[test]
fn test_unknown_rotation_falls_back_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("NEVER"), LogRotation::Never);
}

#[test]
fn test_tui_always_writes_log_file() {
    let logging = LoggingConfig::default();
    assert!(!logging.file_enabled);

    // The terminal is taken by the form, so the file is the only sink
    assert!(logging.writes_file(true));
    assert!(!logging.writes_file(false));

    let logging = LoggingConfig {
        file_enabled: true,
        ..LoggingConfig::default()
    };
    assert!(logging.writes_file(false));
}
