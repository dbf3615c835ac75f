//! Error types for the matching engine.
//!
//! CHANGELOG:
//! - 10/19/2026 - Initial implementation

use thiserror::Error;

/// Errors returned by the matching entry points.
///
/// Empty descriptions, empty candidate lists and empty token sets are not
/// errors; they simply produce no results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("min_confidence must be within [0, 1], got {0}")]
    InvalidConfidence(f64),

    #[error("invalid matcher config: {field} = {value}")]
    InvalidConfig { field: &'static str, value: f64 },
}

/// Reject a confidence floor outside [0, 1] (including NaN).
pub fn check_confidence(min_confidence: f64) -> Result<f64, MatchError> {
    if (0.0..=1.0).contains(&min_confidence) {
        Ok(min_confidence)
    } else {
        Err(MatchError::InvalidConfidence(min_confidence))
    }
}
