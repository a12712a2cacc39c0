//! Tail risk and risk-adjusted return.

use factorscope_math::percentile;
use serde::{Deserialize, Serialize};

use crate::{StatsConfig, StatsError, insight};

/// Risk block of the descriptive statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskInsight {
    /// Return at the configured lower percentile (historical VaR).
    pub value_at_risk: f64,
    /// Unannualized `mean / std`.
    pub sharpe_ratio: f64,
    /// Unannualized `(mean - rf) / std` with the per-period risk-free rate.
    pub excess_sharpe_ratio: f64,
    /// Plain-language reading of the result.
    pub interpretation: String,
}

/// Compute VaR and Sharpe ratios for a series with known mean and std.
///
/// # Errors
/// Returns `StatsError::DegenerateInput` if `std` is not positive, or
/// `StatsError::Math` if the percentile cannot be computed.
pub fn risk_insight(
    returns: &[f64],
    mean: f64,
    std: f64,
    config: &StatsConfig,
) -> Result<RiskInsight, StatsError> {
    if std.is_nan() || std <= 0.0 {
        return Err(StatsError::DegenerateInput);
    }
    let value_at_risk = percentile(returns, config.var_percentile)?;
    let rf = config.risk_free.per_period();

    Ok(RiskInsight {
        value_at_risk,
        sharpe_ratio: mean / std,
        excess_sharpe_ratio: (mean - rf) / std,
        interpretation: insight::value_at_risk_narrative(value_at_risk, config.var_percentile),
    })
}
