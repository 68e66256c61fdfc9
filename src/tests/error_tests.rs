use crate::config::config::load_config_from;
use crate::error::BugzillaError;
use crate::mappings::parse_search_terms;

#[test]
fn test_not_found_display() {
    assert_eq!(BugzillaError::NotFound("123".to_string()).to_string(), "Bug not found: 123");
}

#[test]
fn test_io_error_converts() {
    let dir = tempfile::tempdir().unwrap();

    // A directory cannot be read as a config file
    match load_config_from(dir.path()) {
        Err(BugzillaError::IoError(_)) => {}
        other => panic!("Expected BugzillaError::IoError, got {:?}", other),
    }
}

#[test]
fn test_json_error_converts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    match load_config_from(&path) {
        Err(err @ BugzillaError::JsonError(_)) => assert!(err.to_string().starts_with("JSON error:")),
        other => panic!("Expected BugzillaError::JsonError, got {:?}", other),
    }
}

#[test]
fn test_parse_error_names_the_input() {
    match parse_search_terms("status:NEW stray") {
        Err(BugzillaError::ParseError(msg)) => assert!(msg.contains("status:NEW stray")),
        other => panic!("Expected BugzillaError::ParseError, got {:?}", other),
    }
}

#[test]
fn test_converts_into_graphql_error() {
    let err: async_graphql::Error = BugzillaError::ApiError("HTTP 500: boom".to_string()).into();
    assert_eq!(err.message, "API request failed: HTTP 500: boom");
}
