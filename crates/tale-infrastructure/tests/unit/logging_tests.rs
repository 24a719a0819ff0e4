//! Tests for logging helpers

use tale_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level_accepts_known_levels() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);
}

#[test]
fn test_parse_log_level_rejects_unknown() {
    let error = parse_log_level("verbose").unwrap_err();

    assert!(error.is_configuration());
    assert!(error.to_string().contains("verbose"));
}

// The only test in this binary that installs the global subscriber
#[test]
fn test_init_logging_installs_subscriber_once() {
    let invalid = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&invalid).unwrap_err().is_configuration());

    let config = LoggingConfig::default();
    init_logging(&config).unwrap();

    let error = init_logging(&config).unwrap_err();
    assert!(error.is_configuration());
    assert!(error.to_string().contains("Cannot initialize logging"));
}
