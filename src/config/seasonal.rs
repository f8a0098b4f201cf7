//! Seasonal destination table.
//!
//! Maps calendar months to destinations that are in season, each tagged with
//! the interests it suits. The table is plain data; the current date is
//! always supplied by the caller.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CompatError, Result};

/// A destination that is in season for some month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalPick {
    pub destination: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl SeasonalPick {
    pub fn new(destination: &str, tags: &[&str]) -> Self {
        Self {
            destination: destination.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Month number (1 = January) to in-season destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonalTable {
    months: BTreeMap<u32, Vec<SeasonalPick>>,
}

impl SeasonalTable {
    pub fn empty() -> Self {
        Self {
            months: BTreeMap::new(),
        }
    }

    /// Add a pick for `month`
    pub fn insert(&mut self, month: u32, pick: SeasonalPick) -> Result<()> {
        if !(1..=12).contains(&month) {
            return Err(CompatError::InvalidMonth(month));
        }
        self.months.entry(month).or_default().push(pick);
        Ok(())
    }

    /// Picks for `month`; empty for months without entries
    pub fn for_month(&self, month: u32) -> &[SeasonalPick] {
        self.months.get(&month).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn validate(&self) -> Result<()> {
        match self.months.keys().find(|m| !(1..=12).contains(*m)) {
            Some(&month) => Err(CompatError::InvalidMonth(month)),
            None => Ok(()),
        }
    }

    /// Parse and validate a JSON table keyed by month number
    pub fn from_json_str(json: &str) -> Result<Self> {
        let table: SeasonalTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Read, parse and validate a JSON table file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let table = Self::from_json_str(&fs::read_to_string(path)?)?;
        debug!("loaded seasonal table from {}", path.display());
        Ok(table)
    }
}

impl Default for SeasonalTable {
    fn default() -> Self {
        let entries: [(u32, SeasonalPick); 16] = [
            (1, SeasonalPick::new("Thailand", &["beach", "food", "culture"])),
            (1, SeasonalPick::new("Patagonia", &["hiking", "adventure", "nature"])),
            (2, SeasonalPick::new("New Zealand", &["adventure", "nature", "hiking"])),
            (3, SeasonalPick::new("Japan", &["culture", "food", "photography"])),
            (4, SeasonalPick::new("Morocco", &["culture", "food", "desert"])),
            (5, SeasonalPick::new("Portugal", &["beach", "food", "history"])),
            (6, SeasonalPick::new("Greece", &["beach", "history", "nightlife"])),
            (7, SeasonalPick::new("Iceland", &["nature", "photography", "hiking"])),
            (7, SeasonalPick::new("Croatia", &["beach", "sailing", "nightlife"])),
            (8, SeasonalPick::new("Norway", &["nature", "hiking", "photography"])),
            (9, SeasonalPick::new("Peru", &["hiking", "history", "adventure"])),
            (10, SeasonalPick::new("Nepal", &["hiking", "adventure", "culture"])),
            (10, SeasonalPick::new("Vietnam", &["food", "culture", "adventure"])),
            (11, SeasonalPick::new("Mexico", &["food", "culture", "beach"])),
            (12, SeasonalPick::new("Austria", &["skiing", "culture", "food"])),
            (12, SeasonalPick::new("Australia", &["beach", "nature", "adventure"])),
        ];

        let mut months: BTreeMap<u32, Vec<SeasonalPick>> = BTreeMap::new();
        for (month, pick) in entries {
            months.entry(month).or_default().push(pick);
        }
        Self { months }
    }
}
