//! Compatibility engine module.
//!
//! ## Design Principles
//!
//! The engine is designed for:
//!
//! 1. **Determinism**: Same input always produces same output
//! 2. **Purity**: No I/O, no clock, no shared mutable state
//! 3. **Graceful degradation**: Missing attributes zero a factor, never the call
//! 4. **Explainability**: Unweighted factor values are returned with the score
//!
//! ## Factors
//!
//! | Factor | Standard weight | Trip-vs-trip weight |
//! |--------|-----------------|---------------------|
//! | Destination match | 0.30 | 0.30 |
//! | Date overlap | 0.25 | 0.25 |
//! | Interest similarity | 0.20 | 0.20 |
//! | Budget compatibility | 0.15 | 0.15 |
//! | Travel style match | 0.05 | 0.10 |
//! | Language match | 0.05 | — |
//!
//! ## Example
//!
//! ```
//! use trip_compat::engine::CompatibilityEngine;
//! use trip_compat::types::{DateRange, Destination, TripProposal, UserProfile};
//!
//! let engine = CompatibilityEngine::default();
//! let trip = TripProposal::new(
//!     "t-1",
//!     Destination::new("Kyoto", "Japan"),
//!     DateRange::from_ymd((2025, 4, 1), (2025, 4, 8)).unwrap(),
//! );
//! let a = UserProfile::new("a").with_interests(["food", "temples"]);
//! let b = UserProfile::new("b").with_interests(["food"]);
//!
//! let first = engine.score(&a, &b, &trip);
//! let second = engine.score(&a, &b, &trip);
//! assert_eq!(first, second);
//! assert_eq!(first.factors.interest_similarity, 50.0);
//! ```

pub mod factors;
pub mod scorer;

pub use scorer::CompatibilityEngine;
