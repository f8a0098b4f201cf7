//! Travel style compatibility matrix.
//!
//! The matrix is symmetric data: each unordered pair of known styles maps to
//! a score in `[0, 100]`. Identical styles always score 100. Unknown styles
//! and pairs missing from the table score [`StyleMatrix::fallback`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CompatError, Result};
use crate::types::TravelStyle;

/// Neutral score for unrecognized styles or unmapped pairs.
pub const DEFAULT_STYLE_FALLBACK: f64 = 50.0;

/// One symmetric matrix entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StylePair {
    pub a: TravelStyle,
    pub b: TravelStyle,
    pub score: f64,
}

/// Serialized as a flat list of pairs plus the fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StyleMatrixRepr", into = "StyleMatrixRepr")]
pub struct StyleMatrix {
    scores: BTreeMap<(TravelStyle, TravelStyle), f64>,
    fallback: f64,
}

/// Wire form of [`StyleMatrix`].
#[derive(Serialize, Deserialize)]
pub struct StyleMatrixRepr {
    pub pairs: Vec<StylePair>,
    #[serde(default = "default_fallback")]
    pub fallback: f64,
}

fn default_fallback() -> f64 {
    DEFAULT_STYLE_FALLBACK
}

impl From<StyleMatrixRepr> for StyleMatrix {
    fn from(repr: StyleMatrixRepr) -> Self {
        let mut matrix = StyleMatrix::empty(repr.fallback);
        for pair in repr.pairs {
            matrix.insert(pair.a, pair.b, pair.score);
        }
        matrix
    }
}

impl From<StyleMatrix> for StyleMatrixRepr {
    fn from(matrix: StyleMatrix) -> Self {
        StyleMatrixRepr {
            pairs: matrix.pairs().collect(),
            fallback: matrix.fallback,
        }
    }
}

impl Default for StyleMatrix {
    fn default() -> Self {
        let mut matrix = StyleMatrix::empty(DEFAULT_STYLE_FALLBACK);
        matrix.insert(TravelStyle::Budget, TravelStyle::Backpacker, 90.0);
        matrix.insert(TravelStyle::Budget, TravelStyle::MidRange, 70.0);
        matrix.insert(TravelStyle::Budget, TravelStyle::Luxury, 20.0);
        matrix.insert(TravelStyle::MidRange, TravelStyle::Luxury, 80.0);
        matrix.insert(TravelStyle::MidRange, TravelStyle::Backpacker, 60.0);
        matrix.insert(TravelStyle::Luxury, TravelStyle::Backpacker, 10.0);
        matrix
    }
}

impl StyleMatrix {
    /// A matrix with no pair entries
    pub fn empty(fallback: f64) -> Self {
        Self {
            scores: BTreeMap::new(),
            fallback,
        }
    }

    fn key(a: TravelStyle, b: TravelStyle) -> (TravelStyle, TravelStyle) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Set the score for an unordered pair
    pub fn insert(&mut self, a: TravelStyle, b: TravelStyle, score: f64) {
        self.scores.insert(Self::key(a, b), score);
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Stored entries in key order
    pub fn pairs(&self) -> impl Iterator<Item = StylePair> + '_ {
        self.scores
            .iter()
            .map(|(&(a, b), &score)| StylePair { a, b, score })
    }

    /// Look up the compatibility of two styles
    ///
    /// # Example
    ///
    /// ```
    /// use trip_compat::config::StyleMatrix;
    /// use trip_compat::types::TravelStyle;
    ///
    /// let matrix = StyleMatrix::default();
    /// assert_eq!(matrix.score(TravelStyle::Luxury, TravelStyle::Luxury), 100.0);
    /// assert_eq!(matrix.score(TravelStyle::Backpacker, TravelStyle::Budget), 90.0);
    /// assert_eq!(matrix.score(TravelStyle::Budget, TravelStyle::Unknown), 50.0);
    /// ```
    pub fn score(&self, a: TravelStyle, b: TravelStyle) -> f64 {
        if !a.is_known() || !b.is_known() {
            return self.fallback;
        }
        if a == b {
            return 100.0;
        }
        self.scores
            .get(&Self::key(a, b))
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Reject entries or fallback outside `[0, 100]`
    pub fn validate(&self) -> Result<()> {
        let in_range = |s: f64| s.is_finite() && (0.0..=100.0).contains(&s);
        if !in_range(self.fallback) {
            return Err(CompatError::InvalidStyleScore {
                pair: "fallback".into(),
                score: self.fallback,
            });
        }
        for pair in self.pairs() {
            if !in_range(pair.score) {
                return Err(CompatError::InvalidStyleScore {
                    pair: format!("{}/{}", pair.a, pair.b),
                    score: pair.score,
                });
            }
        }
        Ok(())
    }
}
