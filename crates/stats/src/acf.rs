//! Sample autocorrelation.

use serde::{Deserialize, Serialize};

use crate::{StatsError, descriptive::checked_moments};

/// Default highest lag.
pub const DEFAULT_LAGS: usize = 30;

/// Autocorrelation coefficients for lags `0..=max_lag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutocorrelationProfile(pub Vec<f64>);

impl AutocorrelationProfile {
    /// Coefficient at `lag`, if computed.
    #[must_use]
    pub fn at(&self, lag: usize) -> Option<f64> {
        self.0.get(lag).copied()
    }

    /// Highest computed lag.
    #[must_use]
    pub fn max_lag(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Coefficients as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Autocorrelation up to `min(max_lag, n - 1)`.
///
/// Autocovariances use the full-sample mean and divide by `n` at every lag.
/// The lag-zero coefficient is exactly one.
///
/// # Errors
/// - `StatsError::EmptyInput` if `values` is empty
/// - `StatsError::NonFiniteInput` if any value is NaN or infinite
/// - `StatsError::DegenerateInput` if the series has zero variance
pub fn autocorrelation(
    values: &[f64],
    max_lag: usize,
) -> Result<AutocorrelationProfile, StatsError> {
    let moments = checked_moments(values)?;
    let n = values.len();
    let demeaned: Vec<f64> = values.iter().map(|v| v - moments.mean).collect();
    let lags = max_lag.min(n - 1);

    let mut coefficients = Vec::with_capacity(lags + 1);
    coefficients.push(1.0);
    for lag in 1..=lags {
        let acov: f64 =
            demeaned[lag..].iter().zip(&demeaned[..n - lag]).map(|(a, b)| a * b).sum::<f64>()
                / n as f64;
        coefficients.push(acov / moments.m2);
    }

    Ok(AutocorrelationProfile(coefficients))
}
