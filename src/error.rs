//! Error type for the compatibility engine.
//!
//! Scoring itself is infallible; errors come only from the checked entry
//! points, configuration loading, and match status changes.

use thiserror::Error;

use crate::matches::MatchStatus;

/// Errors returned by checked scoring, config loading, and match records.
#[derive(Debug, Error)]
pub enum CompatError {
    /// A required reference is missing or a range is malformed
    #[error("invalid input `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// The weight table does not sum to 1.0 or has an out-of-range weight
    #[error("invalid weights (sum = {sum}): {reason}")]
    InvalidWeights { sum: f64, reason: &'static str },

    /// A style matrix entry is outside `[0, 100]`
    #[error("style score {score} for {pair} is outside [0, 100]")]
    InvalidStyleScore { pair: String, score: f64 },

    /// A seasonal table month is outside `1..=12`
    #[error("seasonal month {0} is outside 1..=12")]
    InvalidMonth(u32),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config read error: {0}")]
    Io(#[from] std::io::Error),

    /// A match status change that the lifecycle does not allow
    #[error("cannot move match from {from} to {to}")]
    InvalidTransition { from: MatchStatus, to: MatchStatus },
}

pub type Result<T> = std::result::Result<T, CompatError>;

impl CompatError {
    pub(crate) fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        CompatError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
