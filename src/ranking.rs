//! Candidate ranking for discovery endpoints.
//!
//! The engine is invoked once per candidate; results are filtered by a
//! minimum score, sorted by score descending (ties broken by id ascending so
//! the order is deterministic), then paginated.
//!
//! ## Example
//!
//! ```
//! use trip_compat::engine::CompatibilityEngine;
//! use trip_compat::ranking::{rank_trips, RankQuery};
//! use trip_compat::types::{DateRange, Destination, TripProposal};
//!
//! let engine = CompatibilityEngine::trip_to_trip();
//! let june = DateRange::from_ymd((2025, 6, 1), (2025, 6, 15)).unwrap();
//! let base = TripProposal::new("mine", Destination::new("Lisbon", "Portugal"), june);
//! let candidates = vec![
//!     TripProposal::new("porto", Destination::new("Porto", "Portugal"), june),
//!     TripProposal::new("lima", Destination::new("Lima", "Peru"), june),
//! ];
//!
//! let ranked = rank_trips(&engine, &base, &candidates, &RankQuery::with_min_score(0));
//! assert_eq!(ranked[0].id, "porto");
//! assert_eq!(ranked.len(), 2);
//! ```

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::engine::CompatibilityEngine;
use crate::types::{CompatibilityResult, TripProposal, UserProfile};

/// Minimum score applied when the caller does not supply one.
pub const DEFAULT_MIN_SCORE: u8 = 50;

/// Filter and pagination parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankQuery {
    pub min_score: u8,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl Default for RankQuery {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            offset: 0,
            limit: None,
        }
    }
}

impl RankQuery {
    pub fn with_min_score(min_score: u8) -> Self {
        Self {
            min_score,
            ..Self::default()
        }
    }

    pub fn page(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub id: String,
    #[serde(flatten)]
    pub result: CompatibilityResult,
}

fn by_score_then_id(a: &RankedCandidate, b: &RankedCandidate) -> Ordering {
    b.result
        .score
        .cmp(&a.result.score)
        .then_with(|| a.id.cmp(&b.id))
}

/// Filter, sort and paginate already-scored candidates
pub fn rank(mut scored: Vec<RankedCandidate>, query: &RankQuery) -> Vec<RankedCandidate> {
    let total = scored.len();
    scored.retain(|c| c.result.meets(query.min_score));
    scored.sort_by(by_score_then_id);
    debug!(
        "ranked {} of {} candidates (min score {})",
        scored.len(),
        total,
        query.min_score
    );

    let page = scored.into_iter().skip(query.offset);
    match query.limit {
        Some(limit) => page.take(limit).collect(),
        None => page.collect(),
    }
}

/// Rank candidate trips against `base` (the base trip itself is skipped)
///
/// Pass an engine built with [`EngineConfig::trip_to_trip`]; trips carry no
/// language data, so a config with a language weight caps every score
/// below 100.
///
/// [`EngineConfig::trip_to_trip`]: crate::config::EngineConfig::trip_to_trip
pub fn rank_trips(
    engine: &CompatibilityEngine,
    base: &TripProposal,
    candidates: &[TripProposal],
    query: &RankQuery,
) -> Vec<RankedCandidate> {
    let scored = candidates
        .iter()
        .filter(|c| c.id != base.id)
        .map(|c| RankedCandidate {
            id: c.id.clone(),
            result: engine.score_trips(base, c),
        })
        .collect();
    rank(scored, query)
}

/// Rank candidate companions for `requester` on `trip` (the requester is skipped)
pub fn rank_users(
    engine: &CompatibilityEngine,
    requester: &UserProfile,
    candidates: &[UserProfile],
    trip: &TripProposal,
    query: &RankQuery,
) -> Vec<RankedCandidate> {
    let scored = candidates
        .iter()
        .filter(|c| c.id != requester.id)
        .map(|c| RankedCandidate {
            id: c.id.clone(),
            result: engine.score(requester, c, trip),
        })
        .collect();
    rank(scored, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DateRange, Destination, FactorBreakdown};

    fn candidate(id: &str, score: u8) -> RankedCandidate {
        RankedCandidate {
            id: id.to_string(),
            result: CompatibilityResult::new(score, FactorBreakdown::default()),
        }
    }

    fn ids(ranked: &[RankedCandidate]) -> Vec<&str> {
        ranked.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_rank_sorts_and_filters() {
        let scored = vec![
            candidate("c", 40),
            candidate("b", 80),
            candidate("a", 80),
            candidate("d", 95),
        ];
        let ranked = rank(scored, &RankQuery::default());
        assert_eq!(ids(&ranked), vec!["d", "a", "b"]);
    }

    #[test]
    fn test_rank_threshold_inclusive() {
        let ranked = rank(vec![candidate("x", 50)], &RankQuery::default());
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_rank_pagination() {
        let scored = (0..10u8).map(|i| candidate(&format!("{i}"), 50 + i)).collect();
        let ranked = rank(scored, &RankQuery::default().page(2, 3));
        assert_eq!(ids(&ranked), vec!["7", "6", "5"]);
    }

    #[test]
    fn test_rank_offset_past_end() {
        let ranked = rank(vec![candidate("x", 90)], &RankQuery::default().page(5, 10));
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_users_skips_requester() {
        let engine = CompatibilityEngine::default();
        let trip = TripProposal::new(
            "t",
            Destination::new("Oslo", "Norway"),
            DateRange::from_ymd((2025, 8, 1), (2025, 8, 5)).unwrap(),
        );
        let me = UserProfile::new("me").with_languages(["en"]);
        let others = vec![
            me.clone(),
            UserProfile::new("you").with_languages(["en"]),
            UserProfile::new("them").with_languages(["de"]),
        ];
        let ranked = rank_users(&engine, &me, &others, &trip, &RankQuery::with_min_score(1));
        assert_eq!(ids(&ranked), vec!["you"]);
        assert_eq!(ranked[0].result.score, 5);
    }

    #[test]
    fn test_query_json_defaults() {
        let query: RankQuery = serde_json::from_str(r#"{"limit": 20}"#).unwrap();
        assert_eq!(query.min_score, DEFAULT_MIN_SCORE);
        assert_eq!(query.limit, Some(20));
    }
}
