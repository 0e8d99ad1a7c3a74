//! Tests for warning deduplication.
//!
//! The warning set is process-wide, so everything lives in one test to
//! avoid interference between parallel tests.

use selkit_common::warning::{clear_warnings, warn_once, warning_count};

#[test]
fn test_warnings_are_deduplicated_and_clearable() {
    clear_warnings();
    assert_eq!(warning_count(), 0);

    warn_once("selector", "first");
    warn_once("selector", "first");
    assert_eq!(warning_count(), 1);

    // Same message from another component is a different warning.
    warn_once("cli", "first");
    warn_once("selector", "second");
    assert_eq!(warning_count(), 3);

    clear_warnings();
    assert_eq!(warning_count(), 0);

    warn_once("selector", "first");
    assert_eq!(warning_count(), 1);
}
