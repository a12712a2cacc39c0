//! Portfolio weight definitions.

use serde::{Deserialize, Serialize};

use crate::SeriesError;

/// Portfolio weights normalized to sum to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioWeights(Vec<f64>);

impl PortfolioWeights {
    /// Normalize raw weights by their sum.
    ///
    /// Negative entries (short positions) are allowed as long as the total is
    /// non-zero.
    ///
    /// # Errors
    /// Returns `SeriesError::InvalidWeights` if the vector is empty, contains a
    /// non-finite value, or sums to zero.
    pub fn from_raw(raw: &[f64]) -> Result<Self, SeriesError> {
        if raw.is_empty() {
            return Err(SeriesError::InvalidWeights("no weights given".to_string()));
        }
        if raw.iter().any(|w| !w.is_finite()) {
            return Err(SeriesError::InvalidWeights("weights must be finite".to_string()));
        }

        let total: f64 = raw.iter().sum();
        if total.abs() < f64::EPSILON {
            return Err(SeriesError::InvalidWeights("weights sum to zero".to_string()));
        }

        Ok(Self(raw.iter().map(|w| w / total).collect()))
    }

    /// Equal allocation across `n` constituents.
    ///
    /// # Errors
    /// Returns `SeriesError::InvalidWeights` if `n` is zero.
    pub fn equal(n: usize) -> Result<Self, SeriesError> {
        Self::from_raw(&vec![1.0; n])
    }

    /// Get the weights as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of weights.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
