//! Unit tests for configuration loading

use placeholder_gateway::config::Settings;
use std::io::Write;
use std::time::Duration;

fn config_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let settings =
        Settings::load_with_env_prefix("does/not/exist.toml", "PG_TEST_DEFAULTS").unwrap();

    assert_eq!(settings.server.port, 8000);
    assert_eq!(settings.upstream.base_url, "https://jsonplaceholder.typicode.com");
    assert_eq!(settings.upstream.timeout(), Duration::from_millis(5000));
    assert_eq!(settings.probe.target_url(), "http://host.docker.internal:8000/");
    assert_eq!(settings.probe.timeout(), Duration::from_secs(10));
    assert_eq!(settings.logging.format, "json");
}

#[test]
fn test_file_overrides_defaults() {
    let file = config_file(
        r#"
[upstream]
base_url = "http://upstream.test"
timeout_ms = 250

[probe]
host = "http://127.0.0.1"
port = 9000
"#,
    );

    let settings = Settings::load_with_env_prefix(file.path(), "PG_TEST_FILE").unwrap();

    assert_eq!(settings.upstream.base_url, "http://upstream.test");
    assert_eq!(settings.upstream.timeout_ms, 250);
    assert_eq!(settings.probe.target_url(), "http://127.0.0.1:9000/");
    assert_eq!(settings.server.host, "0.0.0.0");
}

#[test]
fn test_environment_overrides_file() {
    let file = config_file(
        r#"
[upstream]
base_url = "http://from-file.test"
"#,
    );
    std::env::set_var("PG_TEST_ENV__UPSTREAM__BASE_URL", "http://from-env.test");
    std::env::set_var("PG_TEST_ENV__PROBE__URL", "http://fastapi-app:8000/");

    let settings = Settings::load_with_env_prefix(file.path(), "PG_TEST_ENV").unwrap();

    assert_eq!(settings.upstream.base_url, "http://from-env.test");
    assert_eq!(settings.probe.target_url(), "http://fastapi-app:8000/");
}

#[test]
fn test_invalid_file_values_rejected() {
    let file = config_file(
        r#"
[server]
port = 0
"#,
    );

    assert!(Settings::load_with_env_prefix(file.path(), "PG_TEST_INVALID").is_err());
}
