//! Tests for the deduplicating warning channel.

use htmlp_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_records_message() {
    warn_once("Test", "recorded message");
    warn_once("Test", "recorded message");
    assert!(has_warned("Test", "recorded message"));
}

#[test]
fn test_component_is_part_of_key() {
    warn_once("First", "shared text");
    assert!(has_warned("First", "shared text"));
    assert!(!has_warned("Second", "shared text"));
}

#[test]
fn test_unreported_warning() {
    assert!(!has_warned("Test", "never reported"));
}
