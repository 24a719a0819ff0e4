//! Tests for the domain error type

use std::error::Error as _;
use tale_domain::error::Error;

#[test]
fn test_discovery_from_keeps_source() {
    let cause = Error::unresolved("Clock", "not registered");
    let error = Error::discovery_from("Timer", cause);

    assert!(error.is_discovery());
    assert!(error.to_string().contains("Timer"));
    assert!(error.to_string().contains("Clock"));
    assert!(error.source().is_some());
}

#[test]
fn test_configuration_predicates() {
    let error = Error::configuration("no converter");

    assert!(error.is_configuration());
    assert!(!error.is_lifecycle());
    assert!(!error.is_discovery());
    assert_eq!(error.to_string(), "Configuration error: no converter");
}

#[test]
fn test_lifecycle_with_source() {
    let io = std::io::Error::other("socket closed");
    let error = Error::lifecycle_with_source("cannot start", io);

    assert!(error.is_lifecycle());
    assert_eq!(
        error.source().map(ToString::to_string).as_deref(),
        Some("socket closed")
    );
}

#[test]
fn test_unknown_fixture_message() {
    let error = Error::unknown_fixture("Missing");
    assert_eq!(error.to_string(), "Unknown fixture: Missing");
}
