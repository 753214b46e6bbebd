//! Error types for calendar moments.

use thiserror::Error;

/// Errors from calendar moment construction or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The fields do not name a real civil moment.
    #[error("invalid calendar moment: {0}")]
    InvalidMoment(String),
    /// Text could not be parsed as a date/time.
    #[error("cannot parse date/time {input:?}: {reason}")]
    Parse {
        input: String,
        reason: &'static str,
    },
}
