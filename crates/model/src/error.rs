//! Error types for factor attribution.

use factorscope_primitives::{SeriesError, Symbol};
use factorscope_stats::StatsError;
use factorscope_traits::{EstimatorError, FactorError};
use factorscope_utils::UtilsError;
use serde::{Deserialize, Serialize};

/// Errors that can occur during analysis.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Ticker absent from the price map.
    #[error("ticker not found: {0}")]
    TickerNotFound(Symbol),

    /// Too few tickers for a portfolio.
    #[error("portfolio needs at least {required} constituents, got {actual}")]
    InsufficientConstituents {
        /// Minimum constituent count.
        required: usize,
        /// Supplied constituent count.
        actual: usize,
    },

    /// Statistics error.
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),

    /// Estimator error.
    #[error("estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Factor construction error.
    #[error("factor error: {0}")]
    Factor(#[from] FactorError),

    /// Alignment or data-frame error.
    #[error("data processing error: {0}")]
    Utils(#[from] UtilsError),

    /// Invalid series or weights.
    #[error("invalid input: {0}")]
    Series(#[from] SeriesError),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed JSON configuration.
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Flat classification of a [`ModelError`] for boundary payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// No observations to work with.
    EmptyInput,
    /// Zero-variance series.
    DegenerateInput,
    /// Ticker absent from the price map.
    TickerNotFound,
    /// Fewer than two portfolio constituents.
    InsufficientConstituents,
    /// Regression underdetermined.
    InsufficientData,
    /// Rank-deficient factor matrix.
    SingularDesign,
    /// Malformed series, weights or configuration.
    InvalidInput,
    /// Numeric or data-frame failure.
    Internal,
}

impl ModelError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TickerNotFound(_) => ErrorKind::TickerNotFound,
            Self::InsufficientConstituents { .. } => ErrorKind::InsufficientConstituents,
            Self::Stats(err) => match err {
                StatsError::EmptyInput => ErrorKind::EmptyInput,
                StatsError::DegenerateInput => ErrorKind::DegenerateInput,
                StatsError::NonFiniteInput | StatsError::InvalidConfig(_) => {
                    ErrorKind::InvalidInput
                }
                StatsError::Math(_) => ErrorKind::Internal,
            },
            Self::Estimator(err) => match err {
                EstimatorError::InsufficientData { .. } => ErrorKind::InsufficientData,
                EstimatorError::SingularDesign { .. } => ErrorKind::SingularDesign,
                EstimatorError::Series(_) => ErrorKind::InvalidInput,
                EstimatorError::Alignment(_) | EstimatorError::LinearAlgebra(_) => {
                    ErrorKind::Internal
                }
            },
            Self::Factor(err) => match err {
                FactorError::EmptyInput => ErrorKind::EmptyInput,
                FactorError::Series(_) => ErrorKind::InvalidInput,
            },
            Self::Utils(err) => match err {
                UtilsError::Polars(_) => ErrorKind::Internal,
                _ => ErrorKind::InvalidInput,
            },
            Self::Series(_) | Self::InvalidConfig(_) | Self::Json(_) => ErrorKind::InvalidInput,
        }
    }

    /// Returns whether this error is recoverable.
    ///
    /// Data-availability conditions are recoverable; numeric and data-frame
    /// failures are not.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self.kind(), ErrorKind::Internal)
    }
}
