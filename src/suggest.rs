//! Seasonal destination suggestions.
//!
//! The current date is a parameter, never read from a clock, so results are
//! reproducible in tests.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::SeasonalTable;
use crate::engine::factors::normalized_set;
use crate::types::UserProfile;

/// An in-season destination with how many of the traveler's interests it suits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub destination: String,
    pub matching_interests: usize,
    pub already_preferred: bool,
}

/// Destinations in season for `today`'s month, best fit first
///
/// Ordered by matching interest count (desc), then destinations the profile
/// already prefers, then name.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use trip_compat::config::SeasonalTable;
/// use trip_compat::suggest::suggest_destinations;
/// use trip_compat::types::UserProfile;
///
/// let table = SeasonalTable::default();
/// let user = UserProfile::new("u").with_interests(["sailing"]);
/// let july = NaiveDate::from_ymd_opt(2025, 7, 14).unwrap();
///
/// let picks = suggest_destinations(&table, &user, july, 1);
/// assert_eq!(picks[0].destination, "Croatia");
/// ```
pub fn suggest_destinations(
    table: &SeasonalTable,
    profile: &UserProfile,
    today: NaiveDate,
    limit: usize,
) -> Vec<Suggestion> {
    let interests = normalized_set(&profile.interests);
    let preferred = normalized_set(&profile.preferred_destinations);

    let mut suggestions: Vec<Suggestion> = table
        .for_month(today.month())
        .iter()
        .map(|pick| {
            let tags = normalized_set(&pick.tags);
            Suggestion {
                destination: pick.destination.clone(),
                matching_interests: tags.intersection(&interests).count(),
                already_preferred: preferred.contains(&pick.destination.trim().to_lowercase()),
            }
        })
        .collect();

    suggestions.sort_by(|a, b| {
        b.matching_interests
            .cmp(&a.matching_interests)
            .then_with(|| b.already_preferred.cmp(&a.already_preferred))
            .then_with(|| a.destination.cmp(&b.destination))
    });
    suggestions.truncate(limit);
    suggestions
}
