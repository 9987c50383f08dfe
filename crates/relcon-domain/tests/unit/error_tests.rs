//! Unit tests for domain error helpers

use relcon_domain::Error;

#[test]
fn test_config_predicate_with_and_without_source() {
    assert!(Error::config("bad").is_config());
    let io = std::io::Error::other("boom");
    assert!(Error::configuration_with_source("bad file", io).is_config());
    assert!(!Error::store("x").is_config());
}

#[test]
fn test_embedding_predicate_covers_network() {
    assert!(Error::embedding("quota").is_embedding());
    assert!(Error::network("timeout").is_embedding());
    assert!(!Error::invalid_argument("empty").is_embedding());
}

#[test]
fn test_error_display() {
    let err = Error::invalid_argument("Search query cannot be empty");
    assert!(err.to_string().contains("Search query cannot be empty"));
}

#[test]
fn test_string_conversion_is_internal() {
    let err: Error = "unexpected".into();
    assert!(matches!(err, Error::Internal { .. }));
}

#[test]
fn test_io_and_json_errors_convert_with_question_mark() {
    fn read() -> relcon_domain::Result<serde_json::Value> {
        let value = serde_json::from_str("{not json")?;
        Ok(value)
    }
    assert!(matches!(read(), Err(Error::Json(_))));

    let io: Error = std::io::Error::other("disk").into();
    assert!(io.to_string().starts_with("I/O error"));
}
