//! Error Extension Tests

use std::io;

use relcon_domain::error::{Error, Result};
use relcon_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context_keeps_source() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).io_context("failed to read file");
    match result {
        Err(Error::Io { message, source }) => {
            assert!(message.contains("failed to read file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

#[test]
fn test_config_context_is_a_config_error() {
    let parse_error = "x".parse::<u32>().unwrap_err();
    let result: Result<u32> = Err(parse_error).config_context("bad queue.capacity");

    let err = result.unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("bad queue.capacity"));
}

#[test]
fn test_with_context_is_lazy() {
    let ok: std::result::Result<u8, io::Error> = Ok(1);
    let value = ok
        .with_context(|| -> String { panic!("context built for a success") })
        .unwrap();
    assert_eq!(value, 1);
}
