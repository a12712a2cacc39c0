//! Factor trait definitions.

use factorscope_primitives::{
    FactorAvailability, FactorName, FactorSeries, ReturnSeries, SeriesError,
};

/// Errors that can occur while building a factor series.
#[derive(Debug, thiserror::Error)]
pub enum FactorError {
    /// The reference return series is empty.
    #[error("empty reference return series")]
    EmptyInput,

    /// Invalid series.
    #[error("series error: {0}")]
    Series(#[from] SeriesError),
}

/// A systematic risk factor built from a reference (benchmark) return series.
///
/// The produced series is date-aligned to the reference series.
pub trait Factor: Send + Sync {
    /// Returns the factor's name.
    fn name(&self) -> FactorName;

    /// Returns whether the factor carries information.
    ///
    /// Builders tag the computed column with this value.
    fn availability(&self) -> FactorAvailability {
        FactorAvailability::Available
    }

    /// Compute the daily factor values.
    ///
    /// # Errors
    /// Returns `FactorError` if the reference series is unusable.
    fn compute(&self, reference: &ReturnSeries) -> Result<FactorSeries, FactorError>;
}
