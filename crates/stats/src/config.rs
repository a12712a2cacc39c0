//! Diagnostics configuration.

use factorscope_primitives::RiskFreeRate;
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_BINS, DEFAULT_LAGS, StatsError};

/// Configuration for return-series diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Number of histogram bins.
    pub histogram_bins: usize,
    /// Highest autocorrelation lag.
    pub acf_lags: usize,
    /// Significance level of the normality test.
    pub significance_level: f64,
    /// Value-at-risk percentile, in percent.
    pub var_percentile: f64,
    /// Risk-free rate used for the excess Sharpe ratio.
    pub risk_free: RiskFreeRate,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            histogram_bins: DEFAULT_BINS,
            acf_lags: DEFAULT_LAGS,
            significance_level: 0.05,
            var_percentile: 5.0,
            risk_free: RiskFreeRate::default(),
        }
    }
}

impl StatsConfig {
    /// Check parameter ranges.
    ///
    /// # Errors
    /// Returns `StatsError::InvalidConfig` naming the first bad parameter.
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.histogram_bins == 0 {
            return Err(StatsError::InvalidConfig("histogram_bins must be positive".into()));
        }
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(StatsError::InvalidConfig(format!(
                "significance_level {} outside (0, 1)",
                self.significance_level
            )));
        }
        if !(self.var_percentile > 0.0 && self.var_percentile < 100.0) {
            return Err(StatsError::InvalidConfig(format!(
                "var_percentile {} outside (0, 100)",
                self.var_percentile
            )));
        }
        let rate = self.risk_free;
        if rate.periods_per_year == 0 || rate.annual.is_nan() || rate.annual <= -1.0 {
            return Err(StatsError::InvalidConfig("risk-free rate is not usable".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_config_defaults() {
        let config = StatsConfig::default();
        assert_eq!(config.histogram_bins, 20);
        assert_eq!(config.acf_lags, 30);
        assert_eq!(config.significance_level, 0.05);
        assert_eq!(config.var_percentile, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: StatsConfig = serde_json::from_str(r#"{"histogram_bins": 40}"#).unwrap();
        assert_eq!(config.histogram_bins, 40);
        assert_eq!(config.acf_lags, 30);
    }

    #[test]
    fn invalid_values_rejected() {
        let config = StatsConfig { histogram_bins: 0, ..StatsConfig::default() };
        assert!(config.validate().is_err());

        let config = StatsConfig { significance_level: 1.5, ..StatsConfig::default() };
        assert!(config.validate().is_err());

        let config = StatsConfig { var_percentile: 0.0, ..StatsConfig::default() };
        assert!(config.validate().is_err());
    }
}
