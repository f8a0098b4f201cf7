//! Compatibility result and its per-factor breakdown.
//!
//! The result is produced on demand and never stored by the engine. Callers
//! that persist it (e.g. inside a match record) can use
//! [`CompatibilityResult::fingerprint`] to detect when a re-score changed.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Factor enum
// ============================================================================

/// One independent sub-score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Factor {
    DestinationMatch,
    DateOverlap,
    InterestSimilarity,
    BudgetCompatibility,
    TravelStyleMatch,
    LanguageMatch,
}

impl Factor {
    /// All factors in canonical order
    pub const ALL: [Factor; 6] = [
        Factor::DestinationMatch,
        Factor::DateOverlap,
        Factor::InterestSimilarity,
        Factor::BudgetCompatibility,
        Factor::TravelStyleMatch,
        Factor::LanguageMatch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Factor::DestinationMatch => "destinationMatch",
            Factor::DateOverlap => "dateOverlap",
            Factor::InterestSimilarity => "interestSimilarity",
            Factor::BudgetCompatibility => "budgetCompatibility",
            Factor::TravelStyleMatch => "travelStyleMatch",
            Factor::LanguageMatch => "languageMatch",
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Clamp a raw factor value into `[0, 100]`; non-finite values become 0.
#[inline]
pub fn clamp_factor(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    value.clamp(0.0, 100.0)
}

// ============================================================================
// FactorBreakdown struct
// ============================================================================

/// Unweighted factor values, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub destination_match: f64,
    pub date_overlap: f64,
    pub interest_similarity: f64,
    pub budget_compatibility: f64,
    pub travel_style_match: f64,
    pub language_match: f64,
}

impl FactorBreakdown {
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

    /// Store `value` for `factor`, clamped to `[0, 100]`
    pub fn set(&mut self, factor: Factor, value: f64) {
        let value = clamp_factor(value);
        match factor {
            Factor::DestinationMatch => self.destination_match = value,
            Factor::DateOverlap => self.date_overlap = value,
            Factor::InterestSimilarity => self.interest_similarity = value,
            Factor::BudgetCompatibility => self.budget_compatibility = value,
            Factor::TravelStyleMatch => self.travel_style_match = value,
            Factor::LanguageMatch => self.language_match = value,
        }
    }

    /// `(factor, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

// ============================================================================
// CompatibilityResult struct
// ============================================================================

/// Overall score plus the factor values it was computed from.
///
/// ## Example
///
/// ```
/// use trip_compat::types::{CompatibilityResult, FactorBreakdown};
///
/// let result = CompatibilityResult::new(72, FactorBreakdown::default());
/// assert_eq!(result.fingerprint().len(), 64);
/// assert_eq!(result.fingerprint(), result.clone().fingerprint());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Rounded weighted score in `[0, 100]`
    pub score: u8,

    /// Unweighted factor values for display
    pub factors: FactorBreakdown,
}

impl CompatibilityResult {
    pub fn new(score: u8, factors: FactorBreakdown) -> Self {
        Self {
            score: score.min(100),
            factors,
        }
    }

    /// Canonical byte encoding: score byte followed by each factor's
    /// big-endian IEEE-754 bits in canonical factor order.
    pub fn canonical_bytes(&self) -> [u8; 49] {
        let mut bytes = [0u8; 49];
        bytes[0] = self.score;
        for (i, (_, value)) in self.factors.iter().enumerate() {
            let start = 1 + i * 8;
            bytes[start..start + 8].copy_from_slice(&value.to_bits().to_be_bytes());
        }
        bytes
    }

    /// SHA-256 of [`Self::canonical_bytes`] as lowercase hex
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_bytes());
        hex::encode(hasher.finalize())
    }

    /// Check if the score meets a minimum threshold
    #[inline]
    pub fn meets(&self, min_score: u8) -> bool {
        self.score >= min_score
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_factor() {
        assert_eq!(clamp_factor(-5.0), 0.0);
        assert_eq!(clamp_factor(150.0), 100.0);
        assert_eq!(clamp_factor(42.5), 42.5);
        assert_eq!(clamp_factor(f64::NAN), 0.0);
        assert_eq!(clamp_factor(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_breakdown_set_clamps() {
        let mut factors = FactorBreakdown::default();
        factors.set(Factor::DateOverlap, 180.0);
        factors.set(Factor::LanguageMatch, -1.0);
        assert_eq!(factors.date_overlap, 100.0);
        assert_eq!(factors.language_match, 0.0);
    }

    #[test]
    fn test_breakdown_iter_order() {
        let factors = FactorBreakdown::default();
        let order: Vec<Factor> = factors.iter().map(|(f, _)| f).collect();
        assert_eq!(order, Factor::ALL.to_vec());
    }

    #[test]
    fn test_result_score_capped() {
        assert_eq!(CompatibilityResult::new(250, FactorBreakdown::default()).score, 100);
    }

    #[test]
    fn test_fingerprint_sensitive_to_factors() {
        let a = CompatibilityResult::new(50, FactorBreakdown::default());
        let mut factors = FactorBreakdown::default();
        factors.set(Factor::InterestSimilarity, 0.5);
        let b = CompatibilityResult::new(50, factors);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_result_json_shape() {
        let mut factors = FactorBreakdown::default();
        factors.set(Factor::BudgetCompatibility, 100.0);
        let json = serde_json::to_value(CompatibilityResult::new(15, factors)).unwrap();
        assert_eq!(json["score"], 15);
        assert_eq!(json["factors"]["budgetCompatibility"], 100.0);
        assert_eq!(json["factors"]["languageMatch"], 0.0);
    }

    #[test]
    fn test_meets() {
        let result = CompatibilityResult::new(50, FactorBreakdown::default());
        assert!(result.meets(50));
        assert!(!result.meets(51));
    }
}
