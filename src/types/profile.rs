//! Traveler profile as consumed by the compatibility engine.
//!
//! Profiles are read-only inputs owned by the caller. Every collection is
//! optional in the wire form and defaults to empty, so a sparse profile
//! degrades individual factors to zero instead of failing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::dates::DateRange;
use crate::types::money::BudgetRange;

// ============================================================================
// TravelStyle enum
// ============================================================================

/// Coarse travel style category.
///
/// Strings outside the known set parse to [`TravelStyle::Unknown`], which
/// the style matrix scores with its neutral default. Serializes as
/// kebab-case; deserializes through the lenient [`FromStr`] parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    Budget,
    MidRange,
    Luxury,
    Backpacker,
    Unknown,
}

impl TravelStyle {
    /// All recognized styles (excludes `Unknown`)
    pub const KNOWN: [TravelStyle; 4] = [
        TravelStyle::Budget,
        TravelStyle::MidRange,
        TravelStyle::Luxury,
        TravelStyle::Backpacker,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TravelStyle::Budget => "budget",
            TravelStyle::MidRange => "mid-range",
            TravelStyle::Luxury => "luxury",
            TravelStyle::Backpacker => "backpacker",
            TravelStyle::Unknown => "unknown",
        }
    }

    #[inline]
    pub fn is_known(self) -> bool {
        self != TravelStyle::Unknown
    }
}

impl FromStr for TravelStyle {
    type Err = std::convert::Infallible;

    /// Lenient parse: case-insensitive, accepts `mid-range`, `mid_range`,
    /// `midrange` and `moderate`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        Ok(match normalized.as_str() {
            "budget" => TravelStyle::Budget,
            "midrange" | "moderate" => TravelStyle::MidRange,
            "luxury" => TravelStyle::Luxury,
            "backpacker" | "backpacking" => TravelStyle::Backpacker,
            _ => TravelStyle::Unknown,
        })
    }
}

impl<'de> Deserialize<'de> for TravelStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        match raw.parse() {
            Ok(style) => Ok(style),
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// UserProfile struct
// ============================================================================

/// A traveler's matching-relevant attributes.
///
/// ## Example
///
/// ```
/// use trip_compat::types::{TravelStyle, UserProfile};
///
/// let user = UserProfile::new("u-1")
///     .with_interests(["food", "hiking"])
///     .with_languages(["en"])
///     .with_style(TravelStyle::Backpacker);
///
/// assert_eq!(user.interests.len(), 2);
/// assert!(user.available_dates.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,

    #[serde(default)]
    pub interests: Vec<String>,

    #[serde(default)]
    pub travel_style: Option<TravelStyle>,

    #[serde(default)]
    pub budget: Option<BudgetRange>,

    #[serde(default)]
    pub languages: Vec<String>,

    #[serde(default)]
    pub preferred_destinations: Vec<String>,

    #[serde(default)]
    pub available_dates: Vec<DateRange>,
}

impl UserProfile {
    /// Create an empty profile with the given identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_destinations<I, S>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_destinations = destinations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_style(mut self, style: TravelStyle) -> Self {
        self.travel_style = Some(style);
        self
    }

    pub fn with_budget(mut self, budget: BudgetRange) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_availability<I>(mut self, windows: I) -> Self
    where
        I: IntoIterator<Item = DateRange>,
    {
        self.available_dates = windows.into_iter().collect();
        self
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
