//! Descriptive statistics for a return series.

use factorscope_math::Moments;
use serde::{Deserialize, Serialize};

use crate::{NormalityTest, RiskInsight, StatsConfig, StatsError, jarque_bera, risk_insight};

/// Summary statistics of a return series.
///
/// Moments are population moments (divisor `n`). `kurtosis` is excess kurtosis,
/// so a normal distribution scores zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Smallest return.
    pub min: f64,
    /// Largest return.
    pub max: f64,
    /// `m3 / m2^1.5`.
    pub skewness: f64,
    /// `m4 / m2^2 - 3`.
    pub kurtosis: f64,
    /// Jarque-Bera test.
    pub normality: NormalityTest,
    /// VaR and Sharpe ratios.
    pub risk: RiskInsight,
}

/// Compute summary statistics, the normality test and the risk block.
///
/// # Errors
/// - `StatsError::EmptyInput` if `returns` is empty
/// - `StatsError::NonFiniteInput` if any return is NaN or infinite
/// - `StatsError::DegenerateInput` if the series has zero variance
pub fn describe(returns: &[f64], config: &StatsConfig) -> Result<Statistics, StatsError> {
    let moments = checked_moments(returns)?;

    let (min, max) = returns
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| (lo.min(r), hi.max(r)));

    let skewness = moments.skewness();
    let kurtosis = moments.excess_kurtosis();
    let normality = jarque_bera(moments.n, skewness, kurtosis, config.significance_level)?;
    let risk = risk_insight(returns, moments.mean, moments.std(), config)?;

    Ok(Statistics {
        mean: moments.mean,
        std: moments.std(),
        min,
        max,
        skewness,
        kurtosis,
        normality,
        risk,
    })
}

/// Moments of a non-empty, finite, non-constant series.
pub(crate) fn checked_moments(returns: &[f64]) -> Result<Moments, StatsError> {
    if returns.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if returns.iter().any(|r| !r.is_finite()) {
        return Err(StatsError::NonFiniteInput);
    }
    let moments = Moments::from_slice(returns)?;
    // A constant series can leave a rounding-sized m2 behind.
    if moments.m2 <= 0.0 || returns.iter().all(|r| *r == returns[0]) {
        return Err(StatsError::DegenerateInput);
    }
    Ok(moments)
}
