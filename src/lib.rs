//! # Trip Compat
//!
//! Deterministic compatibility scoring for travel companions.
//!
//! ## Architecture
//!
//! The crate consists of:
//! - **Types**: Profiles, trips, budgets, date windows, and results
//! - **Config**: Weight tables, style matrix, seasonal table (plain data)
//! - **Engine**: Pure weighted multi-factor scorer
//! - **Ranking**: Candidate filtering, ordering, pagination
//! - **Matches**: Match records holding a score snapshot
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical inputs always produce identical output
//! 2. **No Hidden Clock**: Time-dependent features take the date as a parameter
//! 3. **Fixed-Point Money**: Budget bands use `rust_decimal`
//! 4. **Synchronous Execution**: No async, no locks; share one engine across threads
//!
//! ## Invariants
//!
//! - `score` is in `[0, 100]`, the rounded weighted sum of the factors
//! - each factor is clamped to `[0, 100]` before weighting
//! - weights sum to 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: UserProfile, TripProposal, CompatibilityResult
pub mod types;

/// Configuration data: weights, style matrix, seasonal table
pub mod config;

/// Compatibility engine: factor functions and scorer
pub mod engine;

/// Candidate ranking for discovery
pub mod ranking;

/// Seasonal destination suggestions
pub mod suggest;

/// Match records with score snapshots
pub mod matches;

/// Error type
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use config::{DestinationMode, EngineConfig, InterestMetric, StyleMatrix, Weights};
pub use engine::CompatibilityEngine;
pub use error::{CompatError, Result};
pub use matches::{MatchRecord, MatchStatus};
pub use ranking::{rank_trips, rank_users, RankQuery, RankedCandidate};
pub use types::{
    Budget, BudgetRange, CompatibilityResult, DateRange, Destination, Factor, FactorBreakdown,
    TravelStyle, TripProposal, UserProfile,
};
