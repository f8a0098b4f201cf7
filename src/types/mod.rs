//! Core data types for the compatibility engine
//!
//! All inputs are read-only values owned by the caller; the engine never
//! mutates them.
//!
//! ## Types
//!
//! - [`UserProfile`]: A traveler's interests, style, budget, languages, availability
//! - [`TripProposal`]: Destination, dates, budget, interests and style of a trip
//! - [`CompatibilityResult`]: Score in `[0, 100]` plus a [`FactorBreakdown`]
//! - [`BudgetRange`] / [`Budget`]: Fixed-point amounts (see [`money`])
//! - [`DateRange`]: Closed calendar window (see [`dates`])

pub mod dates;
pub mod money;
mod profile;
mod result;
mod trip;

// Re-export all types at module level
pub use dates::DateRange;
pub use money::{Budget, BudgetRange};
pub use profile::{TravelStyle, UserProfile};
pub use result::{clamp_factor, CompatibilityResult, Factor, FactorBreakdown};
pub use trip::{Destination, TripProposal};
