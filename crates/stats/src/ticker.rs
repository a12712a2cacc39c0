//! Single-ticker diagnostics bundle.

use factorscope_primitives::{Date, PriceSeries, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    AutocorrelationProfile, Histogram, Insights, QqPlot, Statistics, StatsConfig, StatsError,
    autocorrelation, describe, histogram, qq_plot,
};

/// The input prices echoed back for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Observation dates, serialized as ISO-8601.
    pub dates: Vec<Date>,
    /// Closing prices.
    pub prices: Vec<f64>,
}

/// Everything computed for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    /// Ticker symbol.
    pub symbol: Symbol,
    /// Input prices.
    pub price_history: PriceHistory,
    /// Descriptive statistics, normality test and risk block.
    pub statistics: Statistics,
    /// Plain-language readings.
    pub insights: Insights,
    /// Return histogram.
    pub histogram: Histogram,
    /// Normal Q-Q plot data.
    pub qq_plot: QqPlot,
    /// Autocorrelation up to the configured lag.
    pub acf: AutocorrelationProfile,
}

/// Compute returns from `prices` and run every diagnostic on them.
///
/// # Errors
/// - `StatsError::EmptyInput` if there are fewer than two prices
/// - `StatsError::DegenerateInput` if the returns have zero variance
pub fn analyze_ticker(
    prices: &PriceSeries,
    config: &StatsConfig,
) -> Result<TickerReport, StatsError> {
    config.validate()?;
    let returns = prices.returns();
    debug!(symbol = %prices.symbol(), n_returns = returns.len(), "analyzing ticker");

    let values = returns.values();
    let statistics = describe(values, config)?;
    let insights = Insights::from_statistics(&statistics);
    let histogram = histogram(values, config.histogram_bins)?;
    let qq_plot = qq_plot(values)?;
    let acf = autocorrelation(values, config.acf_lags)?;

    info!(
        symbol = %prices.symbol(),
        mean = statistics.mean,
        std = statistics.std,
        normal = statistics.normality.is_normal,
        "ticker analysis complete"
    );

    Ok(TickerReport {
        symbol: prices.symbol().clone(),
        price_history: PriceHistory {
            dates: prices.dates().to_vec(),
            prices: prices.closes().to_vec(),
        },
        statistics,
        insights,
        histogram,
        qq_plot,
        acf,
    })
}
