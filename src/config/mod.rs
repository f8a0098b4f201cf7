//! Engine configuration.
//!
//! ## Overview
//!
//! Every tunable used by scoring is immutable data held in [`EngineConfig`]:
//! the factor weights, the style matrix, and which variant of the
//! destination and interest factors to use. Configs can be built in code or
//! loaded from JSON; both paths go through [`EngineConfig::validate`].
//!
//! ## Presets
//!
//! | Preset | Weights | Interests | Use |
//! |--------|---------|-----------|-----|
//! | [`EngineConfig::standard`] | [`STANDARD_WEIGHTS`] | Jaccard | two users vs. one trip |
//! | [`EngineConfig::trip_to_trip`] | [`TRIP_TO_TRIP_WEIGHTS`] | max-overlap | trip vs. trip |
//!
//! ## Example
//!
//! ```
//! use trip_compat::config::{EngineConfig, InterestMetric};
//!
//! let json = r#"{ "interestMetric": "maxOverlap" }"#;
//! let config = EngineConfig::from_json_str(json).unwrap();
//! assert_eq!(config.interest_metric, InterestMetric::MaxOverlap);
//! assert_eq!(config.points_per_shared_destination, 20.0);
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{CompatError, Result};

pub mod seasonal;
pub mod styles;
pub mod weights;

pub use seasonal::{SeasonalPick, SeasonalTable};
pub use styles::{StyleMatrix, StylePair, DEFAULT_STYLE_FALLBACK};
pub use weights::{Weights, STANDARD_WEIGHTS, TRIP_TO_TRIP_WEIGHTS, WEIGHT_SUM_TOLERANCE};

/// Points awarded per shared preferred destination (capped at 100).
pub const DEFAULT_POINTS_PER_SHARED_DESTINATION: f64 = 20.0;

/// How the destination factor is computed for two users and a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DestinationMode {
    /// Overlap between both users' preferred-destination sets
    #[default]
    SharedPreferences,
    /// Whether each user's preferences name the trip's destination
    TripContainment,
}

/// How two interest sets are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterestMetric {
    /// `|A ∩ B| / |A ∪ B|`
    #[default]
    Jaccard,
    /// `|A ∩ B| / max(|A|, |B|)`
    MaxOverlap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub weights: Weights,
    pub destination_mode: DestinationMode,
    pub interest_metric: InterestMetric,
    pub style_matrix: StyleMatrix,
    pub points_per_shared_destination: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl EngineConfig {
    /// User-vs-user scoring with the full factor table
    pub fn standard() -> Self {
        Self {
            weights: STANDARD_WEIGHTS,
            destination_mode: DestinationMode::SharedPreferences,
            interest_metric: InterestMetric::Jaccard,
            style_matrix: StyleMatrix::default(),
            points_per_shared_destination: DEFAULT_POINTS_PER_SHARED_DESTINATION,
        }
    }

    /// Trip-vs-trip scoring: no language factor, max-overlap interests
    pub fn trip_to_trip() -> Self {
        Self {
            weights: TRIP_TO_TRIP_WEIGHTS,
            interest_metric: InterestMetric::MaxOverlap,
            ..Self::standard()
        }
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_destination_mode(mut self, mode: DestinationMode) -> Self {
        self.destination_mode = mode;
        self
    }

    pub fn with_interest_metric(mut self, metric: InterestMetric) -> Self {
        self.interest_metric = metric;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        self.style_matrix.validate()?;
        let points = self.points_per_shared_destination;
        if !points.is_finite() || points < 0.0 {
            return Err(CompatError::invalid_input(
                "pointsPerSharedDestination",
                format!("must be a non-negative number, got {points}"),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take standard values
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let config = Self::from_json_str(&raw)?;
        debug!("loaded engine config from {}", path.display());
        Ok(config)
    }
}
