//! Factor weight tables.
//!
//! Weights are fractions in `[0, 1]` that must sum to 1.0. A weight of zero
//! removes a factor from the weighted sum without removing it from the
//! breakdown.

use serde::{Deserialize, Serialize};

use crate::error::{CompatError, Result};
use crate::types::{Factor, FactorBreakdown};

/// Allowed drift from 1.0 when validating a weight table.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// User-vs-user weights for scoring two travelers against one trip.
pub const STANDARD_WEIGHTS: Weights = Weights {
    destination_match: 0.30,
    date_overlap: 0.25,
    interest_similarity: 0.20,
    budget_compatibility: 0.15,
    travel_style_match: 0.05,
    language_match: 0.05,
};

/// Trip-vs-trip weights: no language factor, heavier travel style.
pub const TRIP_TO_TRIP_WEIGHTS: Weights = Weights {
    destination_match: 0.30,
    date_overlap: 0.25,
    interest_similarity: 0.20,
    budget_compatibility: 0.15,
    travel_style_match: 0.10,
    language_match: 0.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weights {
    pub destination_match: f64,
    pub date_overlap: f64,
    pub interest_similarity: f64,
    pub budget_compatibility: f64,
    pub travel_style_match: f64,
    pub language_match: f64,
}

impl Default for Weights {
    fn default() -> Self {
        STANDARD_WEIGHTS
    }
}

impl Weights {
    pub fn get(&self, factor: Factor) -> f64 {
        match factor {
            Factor::DestinationMatch => self.destination_match,
            Factor::DateOverlap => self.date_overlap,
            Factor::InterestSimilarity => self.interest_similarity,
            Factor::BudgetCompatibility => self.budget_compatibility,
            Factor::TravelStyleMatch => self.travel_style_match,
            Factor::LanguageMatch => self.language_match,
        }
    }

    pub fn sum(&self) -> f64 {
        Factor::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Reject non-finite or out-of-range weights and tables not summing to 1.0
    pub fn validate(&self) -> Result<()> {
        let sum = self.sum();
        if Factor::ALL
            .iter()
            .map(|f| self.get(*f))
            .any(|w| !w.is_finite() || !(0.0..=1.0).contains(&w))
        {
            return Err(CompatError::InvalidWeights {
                sum,
                reason: "each weight must be a finite value in [0, 1]",
            });
        }
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CompatError::InvalidWeights {
                sum,
                reason: "weights must sum to 1.0",
            });
        }
        Ok(())
    }

    /// `Σ factor × weight`, unrounded
    pub fn weighted_sum(&self, factors: &FactorBreakdown) -> f64 {
        factors.iter().map(|(f, value)| value * self.get(f)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((STANDARD_WEIGHTS.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!((TRIP_TO_TRIP_WEIGHTS.sum() - 1.0).abs() < WEIGHT_SUM_TOLERANCE);
        assert!(STANDARD_WEIGHTS.validate().is_ok());
        assert!(TRIP_TO_TRIP_WEIGHTS.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_sum() {
        let weights = Weights {
            language_match: 0.5,
            ..STANDARD_WEIGHTS
        };
        assert!(matches!(
            weights.validate(),
            Err(CompatError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative() {
        let weights = Weights {
            destination_match: 0.40,
            language_match: -0.05,
            ..STANDARD_WEIGHTS
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_weighted_sum() {
        let mut factors = FactorBreakdown::default();
        factors.set(Factor::DestinationMatch, 100.0);
        factors.set(Factor::LanguageMatch, 100.0);
        assert!((STANDARD_WEIGHTS.weighted_sum(&factors) - 35.0).abs() < 1e-9);
        assert!((TRIP_TO_TRIP_WEIGHTS.weighted_sum(&factors) - 30.0).abs() < 1e-9);
    }
}
