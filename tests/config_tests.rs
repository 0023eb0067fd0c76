// Configuration loading tests
// Author: kelexine (https://github.com/kelexine)

use fridge_chef::config::AppConfig;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_overrides_defaults() {
    let file = write_config(
        r#"
[server]
port = 9000
body_limit_bytes = 1048576

[gemini]
api_key = "AIzaFromFile"
model = "gemini-2.5-flash"
temperature = 0.2

[logging]
format = "json"
"#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.body_limit_bytes, 1048576);
    assert_eq!(config.gemini.api_key, "AIzaFromFile");
    assert_eq!(config.gemini.model, "gemini-2.5-flash");
    assert!((config.gemini.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.gemini.timeout_seconds, 120);
    assert_eq!(config.logging.format, "json");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::from_file(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(
        config.gemini.api_base_url,
        "https://generativelanguage.googleapis.com/v1beta"
    );
    assert!(config.validate().is_err());
}

#[test]
fn test_invalid_port_is_config_error() {
    let file = write_config("[server]\nport = \"not-a-port\"\n");
    assert!(AppConfig::from_file(file.path()).is_err());
}

#[test]
fn test_zero_body_limit_fails_validation() {
    let file = write_config("[server]\nbody_limit_bytes = 0\n[gemini]\napi_key = \"AIzaKey\"\n");
    let config = AppConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}
