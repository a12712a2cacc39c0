//! Return series definitions.

use serde::{Deserialize, Serialize};

use crate::{Date, PriceSeries, SeriesError};

pub(crate) fn check_ordered(dates: &[Date]) -> Result<(), SeriesError> {
    match dates.windows(2).find(|w| w[0] >= w[1]) {
        Some(w) => Err(SeriesError::UnorderedDates { previous: w[0], next: w[1] }),
        None => Ok(()),
    }
}

/// Dated simple returns.
///
/// Never contains the undefined first return of a price series; each value is
/// dated at the later of the two prices it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    dates: Vec<Date>,
    values: Vec<f64>,
}

impl ReturnSeries {
    /// Create a validated return series.
    ///
    /// # Errors
    /// Returns `SeriesError` if lengths differ or dates are not strictly increasing.
    pub fn new(dates: Vec<Date>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if dates.len() != values.len() {
            return Err(SeriesError::LengthMismatch { dates: dates.len(), values: values.len() });
        }
        check_ordered(&dates)?;
        Ok(Self { dates, values })
    }

    /// Compute simple returns from a price series.
    #[must_use]
    pub fn from_prices(prices: &PriceSeries) -> Self {
        let closes = prices.closes();
        let values = closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
        let dates = prices.dates().iter().skip(1).copied().collect();
        Self { dates, values }
    }

    /// Return dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Return values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of returns.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Subtract a constant per-period rate from every return.
    #[must_use]
    pub fn excess_over(&self, rate: f64) -> Self {
        Self { dates: self.dates.clone(), values: self.values.iter().map(|r| r - rate).collect() }
    }
}
