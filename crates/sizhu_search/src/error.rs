//! Error types for pillar search and chart reading.

use sizhu_solar::SolarError;
use sizhu_time::TimeError;
use thiserror::Error;

/// Errors from search entry points and chart reading.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A query field failed validation. Nothing is clamped.
    #[error("invalid search parameter `{field}`: {reason}")]
    InvalidSearchParameters { field: &'static str, reason: String },
    /// Rejected coordinates when reading a chart.
    #[error("solar error: {0}")]
    Solar(#[from] SolarError),
    /// Error from calendar moment handling.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

impl SearchError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSearchParameters {
            field,
            reason: reason.into(),
        }
    }
}
