//! Budget amounts and affordability bands.
//!
//! ## Overview
//!
//! All budget arithmetic uses `rust_decimal::Decimal` so that band edges and
//! penalty ratios are exact. Only the final factor value leaves this module
//! as `f64`.
//!
//! ## Effective Band
//!
//! A party's affordability band is derived from whatever they stated:
//!
//! | Field | Fallback |
//! |-------|----------|
//! | `max` | `preferred × 1.5` |
//! | `min` | `0` |
//!
//! ## Examples
//!
//! ```
//! use trip_compat::types::money::{parse_amount, BudgetRange};
//!
//! let range = BudgetRange::preferred(parse_amount("1000").unwrap(), "USD");
//! let (min, max) = range.effective_band().unwrap();
//! assert_eq!(min, parse_amount("0").unwrap());
//! assert_eq!(max, parse_amount("1500").unwrap());
//! ```

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Multiplier applied to a preferred budget when no explicit max is given.
pub const PREFERRED_HEADROOM: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

// ============================================================================
// Conversion Functions
// ============================================================================

/// Parse a decimal string into a non-negative amount
///
/// # Returns
///
/// * `Some(Decimal)` - The parsed amount
/// * `None` - If parsing fails or the value is negative
///
/// # Example
///
/// ```
/// use trip_compat::types::money::parse_amount;
///
/// assert!(parse_amount("1250.50").is_some());
/// assert_eq!(parse_amount("-1"), None);
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let decimal = Decimal::from_str(s.trim()).ok()?;
    if decimal.is_sign_negative() {
        return None;
    }
    Some(decimal)
}

/// Convert a Decimal ratio/percentage to f64, mapping failures to 0.0
pub fn decimal_to_f64(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Case-insensitive currency comparison (`"usd" == "USD"`)
pub fn same_currency(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

// ============================================================================
// Budget
// ============================================================================

/// A single estimated amount, e.g. a trip's total budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub amount: Decimal,
    pub currency: String,
}

impl Budget {
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }
}

// ============================================================================
// BudgetRange
// ============================================================================

/// A traveler's stated budget.
///
/// Any of the three bounds may be absent. A range with neither `max` nor
/// `preferred` has no upper edge and therefore no effective band.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRange {
    #[serde(default)]
    pub min: Option<Decimal>,
    #[serde(default)]
    pub max: Option<Decimal>,
    #[serde(default)]
    pub preferred: Option<Decimal>,
    pub currency: String,
}

impl BudgetRange {
    /// Create a range with explicit bounds
    pub fn new(min: Decimal, max: Decimal, currency: impl Into<String>) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            preferred: None,
            currency: currency.into(),
        }
    }

    /// Create a range from a preferred amount only
    pub fn preferred(preferred: Decimal, currency: impl Into<String>) -> Self {
        Self {
            min: None,
            max: None,
            preferred: Some(preferred),
            currency: currency.into(),
        }
    }

    /// Derive the `(min, max)` affordability band
    ///
    /// # Returns
    ///
    /// * `Some((min, max))` - `max` is the explicit max or `preferred × 1.5`,
    ///   `min` is the explicit min or zero
    /// * `None` - If there is no way to derive an upper edge
    pub fn effective_band(&self) -> Option<(Decimal, Decimal)> {
        let max = match (self.max, self.preferred) {
            (Some(max), _) => max,
            (None, Some(preferred)) => preferred.checked_mul(PREFERRED_HEADROOM)?,
            (None, None) => return None,
        };
        let min = self.min.unwrap_or(Decimal::ZERO);
        Some((min, max))
    }
}

// ============================================================================
// Band Scoring
// ============================================================================

/// Score how well `amount` fits into `[band_min, band_max]`
///
/// Inside the band the score is 100. Outside, each violated edge applies a
/// linear penalty `100 × (1 − distance / edge)`, floored at 0. When the band
/// is inverted (no common range) both edges may be violated and the lower
/// of the two scores wins.
///
/// # Example
///
/// ```
/// use trip_compat::types::money::{band_score, parse_amount};
///
/// let d = |s| parse_amount(s).unwrap();
/// assert_eq!(band_score(d("1000"), d("800"), d("1500")), d("100"));
/// assert_eq!(band_score(d("2250"), d("800"), d("1500")), d("50"));
/// assert_eq!(band_score(d("400"), d("800"), d("1500")), d("50"));
/// assert_eq!(band_score(d("5000"), d("800"), d("1500")), d("0"));
/// ```
pub fn band_score(amount: Decimal, band_min: Decimal, band_max: Decimal) -> Decimal {
    let lower = if amount >= band_min {
        Decimal::ONE_HUNDRED
    } else {
        edge_penalty(band_min - amount, band_min)
    };
    let upper = if amount <= band_max {
        Decimal::ONE_HUNDRED
    } else {
        edge_penalty(amount - band_max, band_max)
    };
    lower.min(upper)
}

fn edge_penalty(distance: Decimal, edge: Decimal) -> Decimal {
    if edge <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let ratio = distance.checked_div(edge).unwrap_or(Decimal::ONE);
    let score = Decimal::ONE_HUNDRED * (Decimal::ONE - ratio.min(Decimal::ONE));
    score.max(Decimal::ZERO)
}

// ============================================================================
// Unit Tests
// ============================================================================
