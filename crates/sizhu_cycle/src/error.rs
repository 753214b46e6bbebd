//! Error types for sexagenary values.

use thiserror::Error;

/// Errors from pillar construction or parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CycleError {
    /// Stem and branch disagree in polarity, or the text is not a pillar.
    #[error("invalid pillar {input:?}: {reason}")]
    InvalidPillar {
        input: String,
        reason: &'static str,
    },
    /// A four-pillar signature string did not have four pillars.
    #[error("invalid signature {input:?}: {reason}")]
    InvalidSignature {
        input: String,
        reason: &'static str,
    },
}
