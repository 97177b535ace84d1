//! Logged assertion helpers.
//!
//! These wrap standard assertions with tracing logs so CI output shows the
//! compared values even when a later assertion panics.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    if actual != expected {
        tracing::error!(
            context = context,
            expected = ?expected,
            actual = ?actual,
            "assertion failed: values not equal"
        );
    }

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that `haystack` contains `needle`, logging both on failure.
#[track_caller]
pub fn assert_contains_logged(context: &str, haystack: &str, needle: &str) {
    let found = haystack.contains(needle);
    if !found {
        tracing::error!(
            context = context,
            needle = needle,
            haystack = haystack,
            "assertion failed: substring missing"
        );
    }
    assert!(found, "{context}: `{needle}` not found in `{haystack}`");
}

/// Count non-overlapping occurrences of `needle`.
pub fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
