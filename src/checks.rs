//! Assertion helpers for test bodies.
//!
//! Counterparts to the usual panicking assertions that return a
//! [`TestFailure`] instead, so test bodies propagate them with `?` and the
//! scheduler records the failure without unwinding.

use std::fmt::Debug;

use crate::suite::TestFailure;

/// Check that two values are equal.
pub fn check_eq<T: PartialEq + Debug>(left: T, right: T) -> Result<(), TestFailure> {
    if left == right {
        Ok(())
    } else {
        Err(TestFailure::new(format!(
            "check failed: left != right\n  left:  {left:?}\n  right: {right:?}"
        )))
    }
}

/// Check that a condition holds.
pub fn check_true(condition: bool) -> Result<(), TestFailure> {
    if condition {
        Ok(())
    } else {
        Err(TestFailure::new("check failed: condition is false"))
    }
}

/// Explicitly fail a test with a message.
pub fn fail(message: impl Into<String>) -> Result<(), TestFailure> {
    Err(TestFailure::new(message))
}
