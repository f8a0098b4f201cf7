//! Per-factor scoring functions.
//!
//! Each function is pure and returns a raw value in `[0, 100]`. Missing
//! inputs produce 0 rather than an error. The scorer clamps again when it
//! stores the value, so callers composing these directly get the same
//! bounds.

use std::collections::BTreeSet;

use log::debug;
use rust_decimal::Decimal;

use crate::config::{InterestMetric, StyleMatrix};
use crate::types::dates::coverage_percent;
use crate::types::money::{band_score, decimal_to_f64, same_currency};
use crate::types::{Budget, BudgetRange, DateRange, Destination, TravelStyle};

// ============================================================================
// Set helpers
// ============================================================================

/// Trimmed, lowercased, non-empty entries
pub fn normalized_set(items: &[String]) -> BTreeSet<String> {
    items
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn words(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Whole-word containment: one name's words appear as a contiguous run in
/// the other's ("Lisbon, PT" names "lisbon"; "Venice" does not name "Nice")
fn names_match(a: &str, b: &str) -> bool {
    let (a, b) = (words(a), words(b));
    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    !short.is_empty() && long.windows(short.len()).any(|run| run == short.as_slice())
}

// ============================================================================
// Destination
// ============================================================================

/// `min(shared × points, 100)` over both users' preferred destinations
///
/// # Example
///
/// ```
/// use trip_compat::engine::factors::destination_shared;
///
/// let a = vec!["Lisbon".to_string(), "Tokyo".to_string()];
/// let b = vec!["tokyo ".to_string(), "Lisbon".to_string(), "Rome".to_string()];
/// assert_eq!(destination_shared(&a, &b, 20.0), 40.0);
/// ```
pub fn destination_shared(a: &[String], b: &[String], points: f64) -> f64 {
    let a = normalized_set(a);
    let b = normalized_set(b);
    let shared = a.intersection(&b).count();
    (shared as f64 * points).min(100.0)
}

/// Check whether any preferred destination names the trip's city, country
/// or region (case-insensitive whole-word containment in either direction)
pub fn prefers_destination(preferred: &[String], destination: &Destination) -> bool {
    preferred
        .iter()
        .any(|p| destination.names().any(|name| names_match(p, name)))
}

/// 50 points for each user whose preferences name the trip's destination
pub fn destination_containment(a: &[String], b: &[String], destination: &Destination) -> f64 {
    [a, b]
        .iter()
        .filter(|prefs| prefers_destination(prefs, destination))
        .count() as f64
        * 50.0
}

/// Trip-vs-trip destination proximity: city 100, country 50, region 25
pub fn destination_proximity(a: &Destination, b: &Destination) -> f64 {
    let eq = |x: &str, y: &str| {
        let x = x.trim();
        !x.is_empty() && x.eq_ignore_ascii_case(y.trim())
    };
    let same_country = eq(&a.country, &b.country);
    if same_country && eq(&a.city, &b.city) {
        return 100.0;
    }
    if same_country {
        return 50.0;
    }
    match (&a.region, &b.region) {
        (Some(ra), Some(rb)) if eq(ra, rb) => 25.0,
        _ => 0.0,
    }
}

// ============================================================================
// Dates
// ============================================================================

/// Minimum of each user's availability coverage of the trip window
///
/// A user with no availability windows contributes 0, which makes the
/// whole factor 0.
pub fn date_overlap(a: &[DateRange], b: &[DateRange], trip: &DateRange) -> f64 {
    coverage_percent(trip, a).min(coverage_percent(trip, b))
}

/// Trip-vs-trip overlap: shared days over each trip's duration, minimum of the two
pub fn trip_date_overlap(a: &DateRange, b: &DateRange) -> f64 {
    coverage_percent(a, std::slice::from_ref(b)).min(coverage_percent(b, std::slice::from_ref(a)))
}

// ============================================================================
// Interests
// ============================================================================

/// Interest-set similarity under `metric`; 0 if either set is empty
///
/// # Example
///
/// ```
/// use trip_compat::config::InterestMetric;
/// use trip_compat::engine::factors::interest_similarity;
///
/// let a = vec!["adventure".to_string(), "food".to_string()];
/// let b = vec!["food".to_string(), "culture".to_string()];
/// assert_eq!(interest_similarity(&a, &b, InterestMetric::MaxOverlap), 50.0);
/// assert!((interest_similarity(&a, &b, InterestMetric::Jaccard) - 100.0 / 3.0).abs() < 1e-9);
/// ```
pub fn interest_similarity(a: &[String], b: &[String], metric: InterestMetric) -> f64 {
    let a = normalized_set(a);
    let b = normalized_set(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let common = a.intersection(&b).count() as f64;
    let denominator = match metric {
        InterestMetric::Jaccard => a.union(&b).count(),
        InterestMetric::MaxOverlap => a.len().max(b.len()),
    } as f64;

    common / denominator * 100.0
}

// ============================================================================
// Budget
// ============================================================================

fn comparable_band(range: Option<&BudgetRange>, trip: &Budget) -> Option<(Decimal, Decimal)> {
    let range = range?;
    if !same_currency(&range.currency, &trip.currency) {
        debug!(
            "budget currency {} does not match trip currency {}; ignoring range",
            range.currency, trip.currency
        );
        return None;
    }
    range.effective_band()
}

/// Fit of the trip budget into both users' shared affordability band
///
/// Returns 0 if the trip has no budget or either user has no comparable
/// band (missing, or in another currency).
///
/// # Example
///
/// ```
/// use trip_compat::engine::factors::budget_compatibility;
/// use trip_compat::types::money::{parse_amount, Budget, BudgetRange};
///
/// let d = |s| parse_amount(s).unwrap();
/// let a = BudgetRange::new(d("500"), d("1500"), "USD");
/// let b = BudgetRange::new(d("800"), d("2000"), "USD");
/// let trip = Budget::new(d("1000"), "USD");
/// assert_eq!(budget_compatibility(Some(&a), Some(&b), Some(&trip)), 100.0);
/// ```
pub fn budget_compatibility(
    a: Option<&BudgetRange>,
    b: Option<&BudgetRange>,
    trip: Option<&Budget>,
) -> f64 {
    let Some(trip) = trip else {
        return 0.0;
    };
    let (Some((a_min, a_max)), Some((b_min, b_max))) =
        (comparable_band(a, trip), comparable_band(b, trip))
    else {
        return 0.0;
    };

    let band_min = a_min.max(b_min);
    let band_max = a_max.min(b_max);
    decimal_to_f64(band_score(trip.amount, band_min, band_max))
}

/// Trip-vs-trip budget closeness: `100 × smaller / larger`
pub fn budget_closeness(a: Option<&Budget>, b: Option<&Budget>) -> f64 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0.0;
    };
    if !same_currency(&a.currency, &b.currency) {
        return 0.0;
    }
    let (low, high) = if a.amount <= b.amount {
        (a.amount, b.amount)
    } else {
        (b.amount, a.amount)
    };
    if high <= Decimal::ZERO {
        return 100.0;
    }
    match low.checked_div(high) {
        Some(ratio) => decimal_to_f64(ratio * Decimal::ONE_HUNDRED),
        None => 0.0,
    }
}

// ============================================================================
// Style and language
// ============================================================================

/// Style matrix lookup; 0 if either style is missing
pub fn style_match(a: Option<TravelStyle>, b: Option<TravelStyle>, matrix: &StyleMatrix) -> f64 {
    match (a, b) {
        (Some(a), Some(b)) => {
            if !a.is_known() || !b.is_known() {
                debug!("unknown travel style in pair ({a}, {b}); using fallback");
            }
            matrix.score(a, b)
        }
        _ => 0.0,
    }
}

/// 100 if the users share at least one language, else 0
pub fn language_match(a: &[String], b: &[String]) -> f64 {
    let a = normalized_set(a);
    let b = normalized_set(b);
    if a.intersection(&b).next().is_some() {
        100.0
    } else {
        0.0
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::money::parse_amount;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn d(s: &str) -> Decimal {
        parse_amount(s).unwrap()
    }

    fn range(a: (i32, u32, u32), b: (i32, u32, u32)) -> DateRange {
        DateRange::from_ymd(a, b).unwrap()
    }

    #[test]
    fn test_destination_shared_caps_at_100() {
        let many = strings(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(destination_shared(&many, &many, 20.0), 100.0);
        assert_eq!(destination_shared(&many, &[], 20.0), 0.0);
    }

    #[test]
    fn test_destination_containment() {
        let dest = Destination::new("Lisbon", "Portugal").with_region("Europe");
        assert_eq!(
            destination_containment(&strings(&["portugal"]), &strings(&["Lisbon, PT"]), &dest),
            100.0
        );
        assert_eq!(
            destination_containment(&strings(&["Europe"]), &strings(&["Peru"]), &dest),
            50.0
        );
        assert_eq!(destination_containment(&[], &strings(&[" "]), &dest), 0.0);
    }

    #[test]
    fn test_destination_containment_whole_words() {
        let nice = Destination::new("Nice", "France");
        assert_eq!(
            destination_containment(&strings(&["Venice"]), &strings(&["Venice"]), &nice),
            0.0
        );
        let port_louis = Destination::new("Port Louis", "Mauritius");
        assert!(!prefers_destination(&strings(&["US"]), &port_louis));
        assert!(prefers_destination(&strings(&["port louis"]), &port_louis));
        assert!(prefers_destination(&strings(&["Nice, France"]), &nice));
        let new_york = Destination::new("New York", "USA");
        assert!(prefers_destination(&strings(&["York"]), &new_york));
    }

    #[test]
    fn test_destination_proximity() {
        let lisbon = Destination::new("Lisbon", "Portugal").with_region("Europe");
        let porto = Destination::new("Porto", "portugal").with_region("Europe");
        let rome = Destination::new("Rome", "Italy").with_region("europe");
        let lima = Destination::new("Lima", "Peru");
        assert_eq!(destination_proximity(&lisbon, &lisbon.clone()), 100.0);
        assert_eq!(destination_proximity(&lisbon, &porto), 50.0);
        assert_eq!(destination_proximity(&lisbon, &rome), 25.0);
        assert_eq!(destination_proximity(&lisbon, &lima), 0.0);
    }

    #[test]
    fn test_date_overlap_binding_party() {
        let trip = range((2025, 6, 1), (2025, 6, 15));
        let full = vec![range((2025, 5, 1), (2025, 7, 1))];
        let partial = vec![range((2025, 6, 10), (2025, 6, 20))];
        let overlap = date_overlap(&full, &partial, &trip);
        assert!((overlap - 500.0 / 14.0).abs() < 1e-9);
        assert_eq!(date_overlap(&full, &[], &trip), 0.0);
    }

    #[test]
    fn test_trip_date_overlap_uses_shorter_perspective() {
        let long = range((2025, 6, 1), (2025, 6, 21));
        let short = range((2025, 6, 11), (2025, 6, 21));
        // 10 shared days: 100% of the short trip, 50% of the long one.
        assert!((trip_date_overlap(&long, &short) - 50.0).abs() < 1e-9);
        assert_eq!(trip_date_overlap(&long, &short), trip_date_overlap(&short, &long));
    }

    #[test]
    fn test_interest_similarity_empty() {
        let a = strings(&["food"]);
        assert_eq!(interest_similarity(&a, &[], InterestMetric::Jaccard), 0.0);
        assert_eq!(interest_similarity(&[], &a, InterestMetric::MaxOverlap), 0.0);
    }

    #[test]
    fn test_interest_similarity_case_insensitive() {
        let a = strings(&["Food", "HIKING"]);
        let b = strings(&["food", "hiking "]);
        assert_eq!(interest_similarity(&a, &b, InterestMetric::Jaccard), 100.0);
    }

    #[test]
    fn test_budget_band_example() {
        let a = BudgetRange::new(d("500"), d("1500"), "USD");
        let b = BudgetRange::new(d("800"), d("2000"), "USD");
        let over = Budget::new(d("2250"), "USD");
        assert_eq!(budget_compatibility(Some(&a), Some(&b), Some(&over)), 50.0);
    }

    #[test]
    fn test_budget_missing_inputs() {
        let a = BudgetRange::new(d("500"), d("1500"), "USD");
        let trip = Budget::new(d("1000"), "USD");
        assert_eq!(budget_compatibility(Some(&a), None, Some(&trip)), 0.0);
        assert_eq!(budget_compatibility(Some(&a), Some(&a), None), 0.0);
    }

    #[test]
    fn test_budget_currency_mismatch_ignored() {
        let usd = BudgetRange::new(d("500"), d("1500"), "USD");
        let eur = BudgetRange::new(d("500"), d("1500"), "EUR");
        let trip = Budget::new(d("1000"), "usd");
        assert_eq!(budget_compatibility(Some(&usd), Some(&usd), Some(&trip)), 100.0);
        assert_eq!(budget_compatibility(Some(&usd), Some(&eur), Some(&trip)), 0.0);
    }

    #[test]
    fn test_budget_preferred_fallback() {
        // Preferred 1000 → band [0, 1500]
        let a = BudgetRange::preferred(d("1000"), "USD");
        let trip = Budget::new(d("1400"), "USD");
        assert_eq!(budget_compatibility(Some(&a), Some(&a), Some(&trip)), 100.0);
    }

    #[test]
    fn test_budget_closeness() {
        let a = Budget::new(d("500"), "USD");
        let b = Budget::new(d("1000"), "USD");
        let c = Budget::new(d("1000"), "EUR");
        assert_eq!(budget_closeness(Some(&a), Some(&b)), 50.0);
        assert_eq!(budget_closeness(Some(&b), Some(&a)), 50.0);
        assert_eq!(budget_closeness(Some(&b), Some(&c)), 0.0);
        assert_eq!(budget_closeness(Some(&a), None), 0.0);
        let zero = Budget::new(Decimal::ZERO, "USD");
        assert_eq!(budget_closeness(Some(&zero), Some(&zero)), 100.0);
    }

    #[test]
    fn test_style_match() {
        let matrix = StyleMatrix::default();
        assert_eq!(style_match(Some(TravelStyle::Budget), None, &matrix), 0.0);
        assert_eq!(
            style_match(Some(TravelStyle::Budget), Some(TravelStyle::Unknown), &matrix),
            50.0
        );
        assert_eq!(
            style_match(Some(TravelStyle::Budget), Some(TravelStyle::Luxury), &matrix),
            20.0
        );
    }

    #[test]
    fn test_language_match() {
        assert_eq!(language_match(&strings(&["en", "pt"]), &strings(&["PT"])), 100.0);
        assert_eq!(language_match(&strings(&["en"]), &strings(&["fr"])), 0.0);
        assert_eq!(language_match(&[], &[]), 0.0);
    }
}
