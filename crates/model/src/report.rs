//! Analysis reports and the JSON boundary.

use factorscope_primitives::{FactorName, Symbol};
use factorscope_stats::TickerReport;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{ErrorKind, Interpretation, ModelError, RegressionResult};

/// Regression output shared by asset and portfolio reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribution {
    /// Benchmark the market factor was built from.
    pub benchmark: Symbol,
    /// Fitted model.
    pub regression: RegressionResult,
    /// Reading of the fitted model.
    pub interpretation: Interpretation,
    /// Placeholder factors left out of the design matrix.
    pub placeholder_factors: Vec<FactorName>,
}

/// Factor attribution for one asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetReport {
    /// Analyzed ticker.
    pub ticker: Symbol,
    /// Regression and interpretation.
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// Factor attribution for a weighted portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Constituents in input order.
    pub tickers: Vec<Symbol>,
    /// Normalized weights, one per constituent.
    pub weights: Vec<f64>,
    /// Regression and interpretation.
    #[serde(flatten)]
    pub attribution: Attribution,
}

/// Any analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalysisReport {
    /// Ticker diagnostics.
    Ticker(TickerReport),
    /// Single-asset attribution.
    Asset(AssetReport),
    /// Portfolio attribution.
    Portfolio(PortfolioReport),
}

impl From<TickerReport> for AnalysisReport {
    fn from(report: TickerReport) -> Self {
        Self::Ticker(report)
    }
}

impl From<AssetReport> for AnalysisReport {
    fn from(report: AssetReport) -> Self {
        Self::Asset(report)
    }
}

impl From<PortfolioReport> for AnalysisReport {
    fn from(report: PortfolioReport) -> Self {
        Self::Portfolio(report)
    }
}

/// Structured failure payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    /// Error message.
    pub error: String,
    /// Error classification.
    pub kind: ErrorKind,
}

impl From<&ModelError> for ErrorPayload {
    fn from(err: &ModelError) -> Self {
        Self { error: err.to_string(), kind: err.kind() }
    }
}

/// Render a result as JSON: the report itself, or an [`ErrorPayload`].
///
/// Non-finite floats become `null`.
#[must_use]
pub fn to_json<T>(result: &Result<T, ModelError>) -> Value
where
    T: Serialize,
{
    let rendered = match result {
        Ok(report) => serde_json::to_value(report),
        Err(err) => serde_json::to_value(ErrorPayload::from(err)),
    };
    rendered.unwrap_or_else(|e| {
        serde_json::json!({ "error": e.to_string(), "kind": ErrorKind::Internal })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_shape() {
        let result: Result<AnalysisReport, _> = Err(ModelError::TickerNotFound("TSLA".into()));
        let json = to_json(&result);
        assert_eq!(json["error"], "ticker not found: TSLA");
        assert_eq!(json["kind"], "TickerNotFound");
    }

    #[test]
    fn insufficient_constituents_payload() {
        let err = ModelError::InsufficientConstituents { required: 2, actual: 0 };
        let payload = ErrorPayload::from(&err);
        assert_eq!(payload.kind, ErrorKind::InsufficientConstituents);
        let json = to_json::<AnalysisReport>(&Err(err));
        assert_eq!(json["kind"], "InsufficientConstituents");
    }

    #[test]
    fn nan_becomes_null() {
        let json = to_json::<Vec<f64>>(&Ok(vec![1.0, f64::NAN]));
        assert_eq!(json, serde_json::json!([1.0, null]));
    }
}
