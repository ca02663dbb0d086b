//! Tests for the de-duplicating warning system.

use bramble_common::warning::{log_parse_error, warn_once, was_warned};

#[test]
fn test_warn_once_records_message() {
    warn_once("Test Component", "first message");
    assert!(was_warned("Test Component", "first message"));
    assert!(!was_warned("Test Component", "never reported"));
}

#[test]
fn test_warnings_are_keyed_by_component() {
    warn_once("Component A", "shared text");
    assert!(was_warned("Component A", "shared text"));
    assert!(!was_warned("Component B", "shared text"));
}

#[test]
fn test_log_parse_error_does_not_record_warning() {
    log_parse_error("HTML Tokenizer", "eof-in-tag", 12);
    assert!(!was_warned("HTML Tokenizer", "eof-in-tag"));
}
