//! Analyzer configuration.

use factorscope_primitives::{RiskFreeRate, Symbol};
use factorscope_stats::StatsConfig;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Configuration for [`FactorAnalyzer`](crate::FactorAnalyzer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Risk-free rate subtracted from asset and benchmark returns.
    pub risk_free: RiskFreeRate,
    /// Default benchmark ticker.
    pub benchmark: Symbol,
    /// Significance level for alpha and factor tests.
    pub significance_level: f64,
    /// Put placeholder factors into the design matrix.
    pub include_placeholder_factors: bool,
    /// Ticker diagnostics settings.
    pub stats: StatsConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            risk_free: RiskFreeRate::default(),
            benchmark: Symbol::new("SPY"),
            significance_level: 0.05,
            include_placeholder_factors: false,
            stats: StatsConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    ///
    /// # Errors
    /// Returns `ModelError::Json` on malformed JSON, or
    /// `ModelError::InvalidConfig` if a value is out of range.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    /// Returns `ModelError::InvalidConfig` naming the first bad parameter.
    pub fn validate(&self) -> Result<(), ModelError> {
        if !(self.significance_level > 0.0 && self.significance_level < 1.0) {
            return Err(ModelError::InvalidConfig(format!(
                "significance_level {} outside (0, 1)",
                self.significance_level
            )));
        }
        let rate = self.risk_free;
        if rate.periods_per_year == 0 || rate.annual.is_nan() || rate.annual <= -1.0 {
            return Err(ModelError::InvalidConfig("risk-free rate is not usable".into()));
        }
        if self.benchmark.as_str().is_empty() {
            return Err(ModelError::InvalidConfig("benchmark ticker is empty".into()));
        }
        self.stats.validate().map_err(|e| ModelError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyzer_config_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.benchmark.as_str(), "SPY");
        assert_eq!(config.risk_free.annual, 0.05);
        assert_eq!(config.risk_free.periods_per_year, 252);
        assert!(!config.include_placeholder_factors);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_json_overrides_subset() {
        let config = AnalyzerConfig::from_json_str(
            r#"{"benchmark": "QQQ", "risk_free": {"annual": 0.03}, "stats": {"acf_lags": 10}}"#,
        )
        .unwrap();
        assert_eq!(config.benchmark.as_str(), "QQQ");
        assert_eq!(config.risk_free.annual, 0.03);
        assert_eq!(config.risk_free.periods_per_year, 252);
        assert_eq!(config.stats.acf_lags, 10);
        assert_eq!(config.stats.histogram_bins, 20);
        assert_eq!(config.significance_level, 0.05);
    }

    #[test]
    fn from_json_rejects_bad_values() {
        let err = AnalyzerConfig::from_json_str(r#"{"significance_level": 2.0}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));

        let err = AnalyzerConfig::from_json_str(r#"{"stats": {"histogram_bins": 0}}"#).unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));

        let err = AnalyzerConfig::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ModelError::Json(_)));
    }
}
