use crate::config::config::{load_config_from, save_config_to};
use crate::config::Config;
use crate::constants::{BUGZILLA_API_URL, DEFAULT_TIMEOUT_SECS};

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json")).unwrap();

    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, BUGZILLA_API_URL);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");

    let config = Config {
        api_key: Some("abc123".to_string()),
        base_url: "https://bugzilla.example.org/rest".to_string(),
        timeout_secs: 5,
    };
    save_config_to(&config, &path).unwrap();

    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "api_key": "abc123" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.api_key.as_deref(), Some("abc123"));
    assert_eq!(config.base_url, BUGZILLA_API_URL);
}

#[test]
fn test_invalid_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();

    assert!(load_config_from(&path).is_err());
}
