//! Error types for solar-time calculations.

use thiserror::Error;

/// Errors from solar-time calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolarError {
    /// Longitude or latitude outside its range, or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(String),
}
