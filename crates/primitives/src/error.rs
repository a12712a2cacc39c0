//! Error types for series construction.

use crate::Date;

/// Errors raised when a series or weight vector violates its invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Dates and values have different lengths.
    #[error("length mismatch: {dates} dates but {values} values")]
    LengthMismatch {
        /// Number of dates.
        dates: usize,
        /// Number of values.
        values: usize,
    },

    /// Dates are not strictly increasing.
    #[error("dates must be strictly increasing: {previous} is followed by {next}")]
    UnorderedDates {
        /// Earlier position.
        previous: Date,
        /// Offending date.
        next: Date,
    },

    /// A closing price is zero, negative or not finite.
    #[error("invalid closing price {price} on {date}")]
    InvalidPrice {
        /// Date of the offending price.
        date: Date,
        /// Offending price.
        price: f64,
    },

    /// Weight vector cannot be normalized.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}
