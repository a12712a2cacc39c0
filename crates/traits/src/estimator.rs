//! Factor attribution estimator trait definitions.

use factorscope_primitives::{FactorTable, ReturnSeries, SeriesError};

/// Errors that can occur during estimation.
#[derive(Debug, thiserror::Error)]
pub enum EstimatorError {
    /// Too few aligned observations for the number of coefficients.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Required number of observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Rank-deficient design matrix.
    #[error("singular design matrix over columns [{}]", .columns.join(", "))]
    SingularDesign {
        /// Design columns, intercept included.
        columns: Vec<String>,
    },

    /// Inputs could not be aligned on date.
    #[error("alignment error: {0}")]
    Alignment(String),

    /// Linear algebra error.
    #[error("linear algebra error: {0}")]
    LinearAlgebra(String),

    /// Invalid series.
    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}

/// Trait for attributing an excess-return series to a set of factors.
pub trait ReturnsEstimator: Send + Sync {
    /// Configuration type for this estimator.
    type Config: Default + Clone + Send + Sync;

    /// Fit result.
    type Output;

    /// Create a new estimator with the given configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Fit `excess_returns` against every column of `factors`.
    ///
    /// Inputs are aligned on the intersection of their dates before fitting.
    ///
    /// # Errors
    /// Returns `EstimatorError` if the aligned sample is too small or the
    /// design is singular.
    fn estimate(
        &self,
        excess_returns: &ReturnSeries,
        factors: &FactorTable,
    ) -> Result<Self::Output, EstimatorError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimator_error_display() {
        let err = EstimatorError::InsufficientData { required: 4, actual: 3 };
        assert_eq!(err.to_string(), "insufficient data: need at least 4 observations, got 3");

        let err = EstimatorError::SingularDesign {
            columns: vec!["alpha".into(), "SMB".into(), "HML".into()],
        };
        assert_eq!(err.to_string(), "singular design matrix over columns [alpha, SMB, HML]");
    }
}
