//! Trip proposal as consumed by the compatibility engine.

use serde::{Deserialize, Serialize};

use crate::types::dates::DateRange;
use crate::types::money::Budget;
use crate::types::profile::TravelStyle;

/// Where a trip goes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Destination {
    pub city: String,
    pub country: String,
    #[serde(default)]
    pub region: Option<String>,
}

impl Destination {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Non-empty name parts, most specific first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        [Some(self.city.as_str()), Some(self.country.as_str()), self.region.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// A proposed trip.
///
/// ## Example
///
/// ```
/// use trip_compat::types::{DateRange, Destination, TravelStyle, TripProposal};
///
/// let trip = TripProposal::new(
///     "t-1",
///     Destination::new("Lisbon", "Portugal"),
///     DateRange::from_ymd((2025, 6, 1), (2025, 6, 15)).unwrap(),
/// )
/// .with_style(TravelStyle::MidRange);
///
/// assert!(trip.budget.is_none());
/// assert_eq!(trip.dates.days(), 14);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripProposal {
    pub id: String,
    pub destination: Destination,
    pub dates: DateRange,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub travel_style: Option<TravelStyle>,
}

impl TripProposal {
    pub fn new(id: impl Into<String>, destination: Destination, dates: DateRange) -> Self {
        Self {
            id: id.into(),
            destination,
            dates,
            budget: None,
            interests: Vec::new(),
            travel_style: None,
        }
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = Some(budget);
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_style(mut self, style: TravelStyle) -> Self {
        self.travel_style = Some(style);
        self
    }
}
