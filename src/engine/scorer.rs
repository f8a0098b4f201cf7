//! The compatibility engine.
//!
//! ## Scoring Procedure
//!
//! 1. Compute every factor independently (missing input → 0, weight kept)
//! 2. Clamp each factor to `[0, 100]`
//! 3. Weighted sum with the configured weight table
//! 4. Round to the nearest integer → `score`
//!
//! The engine holds only immutable configuration, so one instance can be
//! shared across threads and called concurrently.

use log::{debug, trace, warn};

use crate::config::{DestinationMode, EngineConfig};
use crate::engine::factors;
use crate::error::{CompatError, Result};
use crate::types::{
    CompatibilityResult, DateRange, Factor, FactorBreakdown, TripProposal, UserProfile,
};

/// Deterministic compatibility scorer.
///
/// ## Example
///
/// ```
/// use trip_compat::engine::CompatibilityEngine;
/// use trip_compat::types::{DateRange, Destination, TripProposal, UserProfile};
///
/// let engine = CompatibilityEngine::default();
///
/// let alice = UserProfile::new("alice").with_languages(["en"]);
/// let bruno = UserProfile::new("bruno").with_languages(["en", "pt"]);
/// let trip = TripProposal::new(
///     "lisbon-june",
///     Destination::new("Lisbon", "Portugal"),
///     DateRange::from_ymd((2025, 6, 1), (2025, 6, 15)).unwrap(),
/// );
///
/// let result = engine.score(&alice, &bruno, &trip);
/// assert_eq!(result.factors.language_match, 100.0);
/// assert_eq!(result.score, 5); // only the language factor is present
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompatibilityEngine {
    config: EngineConfig,
}

impl CompatibilityEngine {
    /// Create an engine from a validated config
    ///
    /// # Errors
    ///
    /// Returns the config's validation error (bad weight sum, out-of-range
    /// style scores).
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine preset for trip-vs-trip ranking
    pub fn trip_to_trip() -> Self {
        Self {
            config: EngineConfig::trip_to_trip(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // User-vs-user scoring
    // ========================================================================

    /// Score two users with respect to one trip
    ///
    /// Never fails: a profile lacking an attribute scores 0 for the factor
    /// that needs it.
    pub fn score(
        &self,
        requester: &UserProfile,
        recipient: &UserProfile,
        trip: &TripProposal,
    ) -> CompatibilityResult {
        let config = &self.config;
        let mut factors = FactorBreakdown::default();

        let destination = match config.destination_mode {
            DestinationMode::SharedPreferences => factors::destination_shared(
                &requester.preferred_destinations,
                &recipient.preferred_destinations,
                config.points_per_shared_destination,
            ),
            DestinationMode::TripContainment => factors::destination_containment(
                &requester.preferred_destinations,
                &recipient.preferred_destinations,
                &trip.destination,
            ),
        };
        factors.set(Factor::DestinationMatch, destination);

        factors.set(
            Factor::DateOverlap,
            factors::date_overlap(
                &requester.available_dates,
                &recipient.available_dates,
                &trip.dates,
            ),
        );

        factors.set(
            Factor::InterestSimilarity,
            factors::interest_similarity(
                &requester.interests,
                &recipient.interests,
                config.interest_metric,
            ),
        );

        factors.set(
            Factor::BudgetCompatibility,
            factors::budget_compatibility(
                requester.budget.as_ref(),
                recipient.budget.as_ref(),
                trip.budget.as_ref(),
            ),
        );

        factors.set(
            Factor::TravelStyleMatch,
            factors::style_match(
                requester.travel_style,
                recipient.travel_style,
                &config.style_matrix,
            ),
        );

        factors.set(
            Factor::LanguageMatch,
            factors::language_match(&requester.languages, &recipient.languages),
        );

        let result = self.finish(factors);
        debug!(
            "scored {} x {} on trip {}: {}",
            requester.id, recipient.id, trip.id, result.score
        );
        result
    }

    /// [`Self::score`] with input validation
    ///
    /// # Errors
    ///
    /// `InvalidInput` if an identifier is empty or any date range has
    /// `start > end`.
    pub fn try_score(
        &self,
        requester: &UserProfile,
        recipient: &UserProfile,
        trip: &TripProposal,
    ) -> Result<CompatibilityResult> {
        check_id("requester.id", &requester.id)?;
        check_id("recipient.id", &recipient.id)?;
        check_trip("trip", trip)?;
        check_windows("requester.availableDates", &requester.available_dates)?;
        check_windows("recipient.availableDates", &recipient.available_dates)?;
        Ok(self.score(requester, recipient, trip))
    }

    // ========================================================================
    // Trip-vs-trip scoring
    // ========================================================================

    /// Score a candidate trip against a base trip
    ///
    /// Language has no trip-level input and is always 0; use an engine built
    /// with [`EngineConfig::trip_to_trip`] so it carries no weight. With a
    /// nonzero language weight the score is capped at `100 − weight × 100`
    /// and a warning is logged.
    pub fn score_trips(&self, base: &TripProposal, candidate: &TripProposal) -> CompatibilityResult {
        let config = &self.config;
        if config.weights.language_match > 0.0 {
            warn!(
                "trip scoring with language weight {}; scores cap below 100",
                config.weights.language_match
            );
        }
        let mut factors = FactorBreakdown::default();

        factors.set(
            Factor::DestinationMatch,
            factors::destination_proximity(&base.destination, &candidate.destination),
        );
        factors.set(
            Factor::DateOverlap,
            factors::trip_date_overlap(&base.dates, &candidate.dates),
        );
        factors.set(
            Factor::InterestSimilarity,
            factors::interest_similarity(
                &base.interests,
                &candidate.interests,
                config.interest_metric,
            ),
        );
        factors.set(
            Factor::BudgetCompatibility,
            factors::budget_closeness(base.budget.as_ref(), candidate.budget.as_ref()),
        );
        factors.set(
            Factor::TravelStyleMatch,
            factors::style_match(
                base.travel_style,
                candidate.travel_style,
                &config.style_matrix,
            ),
        );

        let result = self.finish(factors);
        debug!(
            "scored trip {} against {}: {}",
            candidate.id, base.id, result.score
        );
        result
    }

    /// [`Self::score_trips`] with input validation
    pub fn try_score_trips(
        &self,
        base: &TripProposal,
        candidate: &TripProposal,
    ) -> Result<CompatibilityResult> {
        check_trip("base", base)?;
        check_trip("candidate", candidate)?;
        Ok(self.score_trips(base, candidate))
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn finish(&self, factors: FactorBreakdown) -> CompatibilityResult {
        trace!("factor breakdown: {:?}", factors);
        let weighted = self.config.weights.weighted_sum(&factors);
        let score = weighted.round().clamp(0.0, 100.0) as u8;
        CompatibilityResult::new(score, factors)
    }
}

fn check_id(field: &'static str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(CompatError::invalid_input(field, "identifier is empty"));
    }
    Ok(())
}

fn check_trip(field: &'static str, trip: &TripProposal) -> Result<()> {
    check_id(field, &trip.id)?;
    if !trip.dates.is_well_formed() {
        return Err(CompatError::invalid_input(
            field,
            format!("trip {} ends before it starts", trip.id),
        ));
    }
    Ok(())
}

fn check_windows(field: &'static str, windows: &[DateRange]) -> Result<()> {
    match windows.iter().find(|w| !w.is_well_formed()) {
        Some(w) => Err(CompatError::invalid_input(
            field,
            format!("window {} .. {} ends before it starts", w.start, w.end),
        )),
        None => Ok(()),
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DestinationMode, InterestMetric, Weights};
    use crate::types::money::parse_amount;
    use crate::types::{Budget, BudgetRange, Destination, TravelStyle};

    fn june_trip() -> TripProposal {
        TripProposal::new(
            "t-1",
            Destination::new("Lisbon", "Portugal"),
            DateRange::from_ymd((2025, 6, 1), (2025, 6, 15)).unwrap(),
        )
        .with_budget(Budget::new(parse_amount("1000").unwrap(), "USD"))
        .with_interests(["food"])
        .with_style(TravelStyle::MidRange)
    }

    fn traveler(id: &str) -> UserProfile {
        UserProfile::new(id)
            .with_interests(["food", "history"])
            .with_languages(["en"])
            .with_style(TravelStyle::MidRange)
            .with_destinations(["Lisbon", "Porto", "Madrid", "Seville", "Rome"])
            .with_budget(BudgetRange::new(
                parse_amount("500").unwrap(),
                parse_amount("1500").unwrap(),
                "USD",
            ))
            .with_availability([DateRange::from_ymd((2025, 5, 20), (2025, 6, 30)).unwrap()])
    }

    #[test]
    fn test_perfect_match_scores_100() {
        let engine = CompatibilityEngine::default();
        let result = engine.score(&traveler("a"), &traveler("b"), &june_trip());
        assert_eq!(result.score, 100);
        for (factor, value) in result.factors.iter() {
            assert_eq!(value, 100.0, "{factor}");
        }
    }

    #[test]
    fn test_empty_profiles_score_zero() {
        let engine = CompatibilityEngine::default();
        let result = engine.score(&UserProfile::new("a"), &UserProfile::new("b"), &june_trip());
        assert_eq!(result.score, 0);
        assert_eq!(result.factors, FactorBreakdown::default());
    }

    #[test]
    fn test_missing_factor_keeps_weight() {
        let engine = CompatibilityEngine::default();
        let mut b = traveler("b");
        b.available_dates.clear();
        let result = engine.score(&traveler("a"), &b, &june_trip());
        assert_eq!(result.factors.date_overlap, 0.0);
        assert_eq!(result.score, 75);
    }

    #[test]
    fn test_trip_containment_mode() {
        let config = EngineConfig::standard().with_destination_mode(DestinationMode::TripContainment);
        let engine = CompatibilityEngine::new(config).unwrap();
        let a = UserProfile::new("a").with_destinations(["Portugal"]);
        let b = UserProfile::new("b").with_destinations(["Japan"]);
        let result = engine.score(&a, &b, &june_trip());
        assert_eq!(result.factors.destination_match, 50.0);
        assert_eq!(result.score, 15);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = EngineConfig::standard().with_weights(Weights {
            destination_match: 1.0,
            ..crate::config::STANDARD_WEIGHTS
        });
        assert!(matches!(
            CompatibilityEngine::new(config),
            Err(CompatError::InvalidWeights { .. })
        ));
    }

    #[test]
    fn test_try_score_rejects_empty_id() {
        let engine = CompatibilityEngine::default();
        let err = engine
            .try_score(&UserProfile::new(" "), &traveler("b"), &june_trip())
            .unwrap_err();
        assert!(matches!(err, CompatError::InvalidInput { field: "requester.id", .. }));
    }

    #[test]
    fn test_try_score_rejects_reversed_window() {
        let engine = CompatibilityEngine::default();
        let mut a = traveler("a");
        a.available_dates
            .push(DateRange::from_ymd((2025, 7, 10), (2025, 7, 1)).unwrap());
        assert!(engine.try_score(&a, &traveler("b"), &june_trip()).is_err());
    }

    #[test]
    fn test_try_score_matches_score_on_valid_input() {
        let engine = CompatibilityEngine::default();
        let (a, b, trip) = (traveler("a"), traveler("b"), june_trip());
        assert_eq!(engine.try_score(&a, &b, &trip).unwrap(), engine.score(&a, &b, &trip));
    }

    #[test]
    fn test_score_trips_identical() {
        let engine = CompatibilityEngine::trip_to_trip();
        let trip = june_trip();
        let result = engine.score_trips(&trip, &trip.clone());
        assert_eq!(result.score, 100);
        assert_eq!(result.factors.language_match, 0.0);
    }

    #[test]
    fn test_score_trips_interest_example() {
        let engine = CompatibilityEngine::trip_to_trip();
        assert_eq!(engine.config().interest_metric, InterestMetric::MaxOverlap);
        let a = june_trip().with_interests(["adventure", "food"]);
        let b = june_trip().with_interests(["food", "culture"]);
        let result = engine.score_trips(&a, &b);
        assert_eq!(result.factors.interest_similarity, 50.0);
        assert_eq!(result.score, 90);
    }

    #[test]
    fn test_score_trips_language_weight_caps_score() {
        let trip = june_trip();
        let standard = CompatibilityEngine::default();
        let result = standard.score_trips(&trip, &trip.clone());
        assert_eq!(result.factors.language_match, 0.0);
        assert_eq!(result.score, 95);
        assert_eq!(
            CompatibilityEngine::trip_to_trip().score_trips(&trip, &trip.clone()).score,
            100
        );
    }

    #[test]
    fn test_try_score_trips_rejects_reversed_trip() {
        let engine = CompatibilityEngine::trip_to_trip();
        let mut bad = june_trip();
        bad.dates = DateRange::from_ymd((2025, 6, 15), (2025, 6, 1)).unwrap();
        assert!(engine.try_score_trips(&june_trip(), &bad).is_err());
    }
}
