//! Match records carrying a compatibility snapshot.
//!
//! A match request stores the score and factors computed when it was made,
//! plus the result's fingerprint. Re-scoring later and comparing
//! fingerprints tells the caller whether the stored snapshot is stale.
//!
//! ## Lifecycle
//!
//! ```text
//! Pending ──► Accepted
//!    │
//!    ├──────► Rejected
//!    │
//!    └──────► Cancelled
//! ```
//!
//! Terminal states cannot change.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CompatError, Result};
use crate::types::CompatibilityResult;

// ============================================================================
// MatchStatus enum
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
    Cancelled,
}

impl MatchStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchStatus::Pending => "pending",
            MatchStatus::Accepted => "accepted",
            MatchStatus::Rejected => "rejected",
            MatchStatus::Cancelled => "cancelled",
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self != MatchStatus::Pending
    }

    /// Check if moving from `self` to `next` is allowed
    pub fn can_transition_to(self, next: MatchStatus) -> bool {
        self == MatchStatus::Pending && next.is_terminal()
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// MatchRecord struct
// ============================================================================

/// A match request between two travelers for one trip.
///
/// ## Example
///
/// ```
/// use trip_compat::matches::{MatchRecord, MatchStatus};
/// use trip_compat::types::{CompatibilityResult, FactorBreakdown};
///
/// let snapshot = CompatibilityResult::new(64, FactorBreakdown::default());
/// let mut record = MatchRecord::new("alice", "bruno", "lisbon-june", snapshot, 1_700_000_000_000);
///
/// record.accept(1_700_000_360_000).unwrap();
/// assert_eq!(record.status, MatchStatus::Accepted);
/// assert!(record.cancel(1_700_000_720_000).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub requester_id: String,
    pub recipient_id: String,
    pub trip_id: String,
    pub status: MatchStatus,

    /// Score and factors at request time
    pub compatibility: CompatibilityResult,

    /// Fingerprint of `compatibility`
    pub fingerprint: String,

    /// Unix timestamp in milliseconds when the request was made
    pub created_at: u64,

    /// Unix timestamp in milliseconds of the last status change
    pub updated_at: u64,
}

impl MatchRecord {
    /// Create a pending record from a fresh score
    pub fn new(
        requester_id: impl Into<String>,
        recipient_id: impl Into<String>,
        trip_id: impl Into<String>,
        compatibility: CompatibilityResult,
        timestamp: u64,
    ) -> Self {
        Self {
            requester_id: requester_id.into(),
            recipient_id: recipient_id.into(),
            trip_id: trip_id.into(),
            status: MatchStatus::Pending,
            fingerprint: compatibility.fingerprint(),
            compatibility,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Move to `next`, stamping `updated_at`
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless the record is pending and `next` is terminal.
    pub fn transition(&mut self, next: MatchStatus, timestamp: u64) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(CompatError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        debug!(
            "match {}->{} on {}: {} -> {}",
            self.requester_id, self.recipient_id, self.trip_id, self.status, next
        );
        self.status = next;
        self.updated_at = timestamp;
        Ok(())
    }

    pub fn accept(&mut self, timestamp: u64) -> Result<()> {
        self.transition(MatchStatus::Accepted, timestamp)
    }

    pub fn reject(&mut self, timestamp: u64) -> Result<()> {
        self.transition(MatchStatus::Rejected, timestamp)
    }

    pub fn cancel(&mut self, timestamp: u64) -> Result<()> {
        self.transition(MatchStatus::Cancelled, timestamp)
    }

    /// Check whether a fresh score differs from the stored snapshot
    pub fn is_stale(&self, current: &CompatibilityResult) -> bool {
        self.fingerprint != current.fingerprint()
    }

    /// Replace the snapshot with a fresh score (only while pending)
    ///
    /// Returns `true` if the snapshot changed.
    pub fn refresh(&mut self, current: CompatibilityResult, timestamp: u64) -> bool {
        if self.status.is_terminal() || !self.is_stale(&current) {
            return false;
        }
        self.fingerprint = current.fingerprint();
        self.compatibility = current;
        self.updated_at = timestamp;
        true
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Factor, FactorBreakdown};

    fn snapshot(score: u8) -> CompatibilityResult {
        let mut factors = FactorBreakdown::default();
        factors.set(Factor::InterestSimilarity, score as f64);
        CompatibilityResult::new(score, factors)
    }

    fn pending() -> MatchRecord {
        MatchRecord::new("a", "b", "t", snapshot(60), 1_000)
    }

    #[test]
    fn test_new_record_is_pending() {
        let record = pending();
        assert_eq!(record.status, MatchStatus::Pending);
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.fingerprint, snapshot(60).fingerprint());
    }

    #[test]
    fn test_transitions_from_pending() {
        for next in [MatchStatus::Accepted, MatchStatus::Rejected, MatchStatus::Cancelled] {
            let mut record = pending();
            record.transition(next, 2_000).unwrap();
            assert_eq!(record.status, next);
            assert_eq!(record.updated_at, 2_000);
        }
    }

    #[test]
    fn test_terminal_states_are_final() {
        let mut record = pending();
        record.reject(2_000).unwrap();
        let err = record.accept(3_000).unwrap_err();
        assert!(matches!(
            err,
            CompatError::InvalidTransition {
                from: MatchStatus::Rejected,
                to: MatchStatus::Accepted
            }
        ));
        assert_eq!(record.updated_at, 2_000);
    }

    #[test]
    fn test_pending_to_pending_rejected() {
        let mut record = pending();
        assert!(record.transition(MatchStatus::Pending, 2_000).is_err());
    }

    #[test]
    fn test_staleness_and_refresh() {
        let mut record = pending();
        assert!(!record.is_stale(&snapshot(60)));
        assert!(record.is_stale(&snapshot(70)));

        assert!(record.refresh(snapshot(70), 5_000));
        assert_eq!(record.compatibility.score, 70);
        assert_eq!(record.updated_at, 5_000);
        assert!(!record.refresh(snapshot(70), 6_000));
    }

    #[test]
    fn test_refresh_ignored_after_decision() {
        let mut record = pending();
        record.accept(2_000).unwrap();
        assert!(!record.refresh(snapshot(10), 3_000));
        assert_eq!(record.compatibility.score, 60);
    }

    #[test]
    fn test_status_json() {
        let json = serde_json::to_string(&MatchStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}
