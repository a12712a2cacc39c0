//! Error types for utility functions.

use factorscope_primitives::SeriesError;

/// Errors that can occur during utility operations.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    /// Polars error.
    #[error("polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Invalid parameter.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Missing column.
    #[error("missing column: {0}")]
    MissingColumn(String),

    /// Invalid value in a column.
    #[error("invalid value in column {column}: {reason}")]
    InvalidValue {
        /// Column name.
        column: String,
        /// What is wrong with the value.
        reason: String,
    },

    /// Series invariant violated.
    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}
