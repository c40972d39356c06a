//! Trait abstraction for submission sinks to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;

/// Consumer of validated sign-up records.
///
/// The form only calls [`SubmissionSink::submit`] once every field passes its
/// constraint, and never more than once per submit attempt.
#[cfg_attr(test, mockall::automock)]
pub trait SubmissionSink {
    /// Take ownership of a complete record (log it, store it, ...)
    fn submit(&mut self, values: &FormValues) -> Result<()>;
}
