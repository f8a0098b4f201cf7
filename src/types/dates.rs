//! Date windows used for trips and traveler availability.
//!
//! Windows are closed calendar ranges `[start, end]` at day granularity.
//! A window's duration is `end - start` in days, so June 1 to June 15 spans
//! 14 days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar window `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Build a window from `(year, month, day)` triples
    ///
    /// Returns `None` if either date does not exist.
    ///
    /// ```
    /// use trip_compat::types::DateRange;
    ///
    /// let june = DateRange::from_ymd((2025, 6, 1), (2025, 6, 15)).unwrap();
    /// assert_eq!(june.days(), 14);
    /// assert!(DateRange::from_ymd((2025, 2, 30), (2025, 3, 1)).is_none());
    /// ```
    pub fn from_ymd(start: (i32, u32, u32), end: (i32, u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2)?,
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2)?,
        })
    }

    /// Duration in whole days (negative for a reversed window)
    #[inline]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Check that `start <= end`
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        self.start <= self.end
    }

    /// Check whether `day` falls inside the window (inclusive)
    #[inline]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Days shared with `other`: `max(0, min(end) - max(start))`
    pub fn overlap_days(&self, other: &DateRange) -> i64 {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (end - start).num_days().max(0)
    }
}

/// Merge overlapping or touching windows into a sorted, disjoint list.
///
/// Reversed windows are dropped.
pub fn merge_windows(windows: &[DateRange]) -> Vec<DateRange> {
    let mut sorted: Vec<DateRange> = windows
        .iter()
        .copied()
        .filter(DateRange::is_well_formed)
        .collect();
    sorted.sort();

    let mut merged: Vec<DateRange> = Vec::with_capacity(sorted.len());
    for window in sorted {
        match merged.last_mut() {
            Some(last) if window.start <= last.end => {
                last.end = last.end.max(window.end);
            }
            _ => merged.push(window),
        }
    }
    merged
}

/// Percentage of `trip` covered by `windows`, clamped to `[0, 100]`.
///
/// Windows are merged first so a day offered twice is counted once. A
/// zero-length trip is covered (100) if any window contains its day.
///
/// # Example
///
/// ```
/// use trip_compat::types::{dates::coverage_percent, DateRange};
///
/// let trip = DateRange::from_ymd((2025, 6, 1), (2025, 6, 15)).unwrap();
/// let window = DateRange::from_ymd((2025, 6, 10), (2025, 6, 20)).unwrap();
/// let pct = coverage_percent(&trip, &[window]);
/// assert!((pct - 500.0 / 14.0).abs() < 1e-9);
/// ```
pub fn coverage_percent(trip: &DateRange, windows: &[DateRange]) -> f64 {
    if windows.is_empty() || !trip.is_well_formed() {
        return 0.0;
    }

    let trip_days = trip.days();
    if trip_days == 0 {
        let covered = windows
            .iter()
            .any(|w| w.is_well_formed() && w.contains(trip.start));
        return if covered { 100.0 } else { 0.0 };
    }

    let overlap: i64 = merge_windows(windows)
        .iter()
        .map(|w| trip.overlap_days(w))
        .sum();

    (overlap as f64 / trip_days as f64 * 100.0).clamp(0.0, 100.0)
}

// ============================================================================
// Unit Tests
// ============================================================================
