//! Error types for mathematical operations.

/// Errors that can occur during mathematical operations.
#[derive(Debug, thiserror::Error)]
pub enum MathError {
    /// Invalid percentile value.
    #[error("invalid percentile: {0} (must be in [0, 100])")]
    InvalidPercentile(f64),

    /// Dimension mismatch.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension.
        expected: usize,
        /// Actual dimension.
        actual: usize,
    },

    /// Fewer observations than needed to estimate the parameters.
    #[error("underdetermined system: {observations} observations for {parameters} parameters")]
    Underdetermined {
        /// Number of observations.
        observations: usize,
        /// Number of parameters.
        parameters: usize,
    },

    /// Matrix is singular or nearly singular.
    #[error("matrix is singular or nearly singular")]
    Singular,

    /// Linear algebra error.
    #[error("linear algebra error: {0}")]
    LinearAlgebra(String),

    /// Empty data.
    #[error("empty data provided")]
    EmptyData,

    /// Invalid distribution parameters or argument.
    #[error("distribution error: {0}")]
    Distribution(String),
}
