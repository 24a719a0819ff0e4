//! Tests for error context helpers

use std::error::Error as _;
use tale_domain::error::Error;
use tale_infrastructure::ErrorContext;

fn io_failure() -> std::result::Result<(), std::io::Error> {
    Err(std::io::Error::other("disk full"))
}

#[test]
fn test_context_produces_internal_error() {
    let error = io_failure().context("Writing report").unwrap_err();

    assert!(matches!(error, Error::Internal { .. }));
    assert!(error.to_string().contains("Writing report"));
    assert!(error.to_string().contains("disk full"));
}

#[test]
fn test_config_context_keeps_source() {
    let error = io_failure().config_context("Reading tale.toml").unwrap_err();

    assert!(error.is_configuration());
    assert_eq!(
        error.source().map(ToString::to_string).as_deref(),
        Some("disk full")
    );
}

#[test]
fn test_lifecycle_context() {
    let error = io_failure()
        .lifecycle_context("Starting application")
        .unwrap_err();

    assert!(error.is_lifecycle());
}

#[test]
fn test_ok_passes_through() {
    let value: std::result::Result<u8, std::io::Error> = Ok(7);
    assert_eq!(value.context("unused").unwrap(), 7);
}
