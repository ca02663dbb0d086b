//! `clear_warnings` mutates global state, so it lives in its own test binary.

use bramble_common::warning::{clear_warnings, warn_once, was_warned};

#[test]
fn test_clear_warnings_forgets_everything() {
    warn_once("Clearing", "to be cleared");
    assert!(was_warned("Clearing", "to be cleared"));
    clear_warnings();
    assert!(!was_warned("Clearing", "to be cleared"));

    // Reported again after clearing.
    warn_once("Clearing", "to be cleared");
    assert!(was_warned("Clearing", "to be cleared"));
}
