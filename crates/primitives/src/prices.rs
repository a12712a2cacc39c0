//! Closing price series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Date, ReturnSeries, SeriesError, Symbol};

/// Prices for several tickers, keyed by symbol.
pub type PriceMap = BTreeMap<Symbol, PriceSeries>;

/// Ordered daily closing prices for one ticker.
///
/// Dates are strictly increasing and every price is finite and positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: Symbol,
    dates: Vec<Date>,
    closes: Vec<f64>,
}

impl PriceSeries {
    /// Create a validated price series.
    ///
    /// # Errors
    /// Returns `SeriesError` if lengths differ, dates are not strictly
    /// increasing, or a price is not finite and positive.
    pub fn new(
        symbol: impl Into<Symbol>,
        dates: Vec<Date>,
        closes: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        if dates.len() != closes.len() {
            return Err(SeriesError::LengthMismatch { dates: dates.len(), values: closes.len() });
        }
        crate::returns::check_ordered(&dates)?;
        if let Some((date, price)) =
            dates.iter().zip(&closes).find(|(_, p)| !p.is_finite() || **p <= 0.0)
        {
            return Err(SeriesError::InvalidPrice { date: *date, price: *price });
        }

        Ok(Self { symbol: symbol.into(), dates, closes })
    }

    /// Create a price series from `(date, close)` pairs.
    ///
    /// # Errors
    /// See [`PriceSeries::new`].
    pub fn from_points(
        symbol: impl Into<Symbol>,
        points: impl IntoIterator<Item = (Date, f64)>,
    ) -> Result<Self, SeriesError> {
        let (dates, closes) = points.into_iter().unzip();
        Self::new(symbol, dates, closes)
    }

    /// Ticker symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Observation dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Closing prices.
    #[must_use]
    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    /// Number of observations.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Simple period returns `close[t] / close[t-1] - 1`, dated at `t`.
    ///
    /// Empty when there are fewer than two prices.
    #[must_use]
    pub fn returns(&self) -> ReturnSeries {
        ReturnSeries::from_prices(self)
    }
}
