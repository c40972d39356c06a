//! Submission sinks that receive fully validated sign-up records

mod json_log;
mod traits;

pub use json_log::JsonLogSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::MockSubmissionSink;
