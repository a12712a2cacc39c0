//! Multi-asset analysis orchestration.

use std::collections::BTreeMap;

use factorscope_primitives::{
    PortfolioWeights, PriceMap, PriceSeries, ReturnSeries, SeriesError, Symbol,
};
use factorscope_stats::{TickerReport, analyze_ticker};
use factorscope_traits::{EstimatorError, ReturnsEstimator};
use factorscope_utils::align_return_series;
use tracing::{info, warn};

use crate::{
    AnalysisStage, AnalyzerConfig, AssetReport, Attribution, FactorBuilder, FactorRegression,
    ModelError, PortfolioReport, RegressionConfig, stage::StageTracker,
};

/// Minimum number of portfolio constituents.
pub const MIN_CONSTITUENTS: usize = 2;

/// Runs diagnostics and factor attribution over an in-memory price map.
///
/// Keeps the last asset report per ticker as a convenience cache; nothing else
/// survives between calls.
#[derive(Debug, Clone)]
pub struct FactorAnalyzer {
    prices: PriceMap,
    config: AnalyzerConfig,
    cache: BTreeMap<Symbol, AssetReport>,
    last_stage: AnalysisStage,
}

impl FactorAnalyzer {
    /// Create an analyzer with default configuration.
    #[must_use]
    pub fn new(prices: PriceMap) -> Self {
        Self::with_config(prices, AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    #[must_use]
    pub const fn with_config(prices: PriceMap, config: AnalyzerConfig) -> Self {
        Self { prices, config, cache: BTreeMap::new(), last_stage: AnalysisStage::Idle }
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Get the price map.
    #[must_use]
    pub const fn prices(&self) -> &PriceMap {
        &self.prices
    }

    /// Stage the most recent attribution call ended in.
    #[must_use]
    pub const fn last_stage(&self) -> AnalysisStage {
        self.last_stage
    }

    /// Cached attribution for `ticker`, if one was computed.
    #[must_use]
    pub fn cached(&self, ticker: &str) -> Option<&AssetReport> {
        self.cache.get(ticker)
    }

    /// Drop every cached attribution.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    fn series(&self, ticker: &str) -> Result<&PriceSeries, ModelError> {
        self.prices.get(ticker).ok_or_else(|| ModelError::TickerNotFound(ticker.into()))
    }

    /// Diagnostics for one ticker.
    ///
    /// # Errors
    /// Returns `ModelError::TickerNotFound` for an unknown ticker, or the
    /// diagnostics error.
    pub fn diagnose(&self, ticker: &str) -> Result<TickerReport, ModelError> {
        Ok(analyze_ticker(self.series(ticker)?, &self.config.stats)?)
    }

    /// Diagnostics for every ticker; one failure does not stop the others.
    #[must_use]
    pub fn diagnose_all(&self) -> BTreeMap<Symbol, Result<TickerReport, ModelError>> {
        self.prices
            .iter()
            .map(|(symbol, series)| {
                let report = analyze_ticker(series, &self.config.stats).map_err(ModelError::from);
                if let Err(err) = &report {
                    warn!(symbol = %symbol, error = %err, "ticker diagnostics failed");
                }
                (symbol.clone(), report)
            })
            .collect()
    }

    /// Attribute `ticker` against the configured benchmark.
    ///
    /// # Errors
    /// See [`FactorAnalyzer::analyze_asset_against`].
    pub fn analyze_asset(&mut self, ticker: &str) -> Result<AssetReport, ModelError> {
        let benchmark = self.config.benchmark.clone();
        self.analyze_asset_against(ticker, benchmark.as_str())
    }

    /// Attribute `ticker` against `benchmark`.
    ///
    /// # Errors
    /// - `ModelError::TickerNotFound` if either ticker is missing
    /// - `EstimatorError::InsufficientData` if too few dates overlap
    /// - `EstimatorError::SingularDesign` if the factor matrix is rank-deficient
    pub fn analyze_asset_against(
        &mut self,
        ticker: &str,
        benchmark: &str,
    ) -> Result<AssetReport, ModelError> {
        let mut tracker = StageTracker::new(ticker);
        let result = self.run_asset(ticker, benchmark, &mut tracker);
        self.finish(&mut tracker, result.as_ref().err());

        let report = result?;
        self.cache.insert(report.ticker.clone(), report.clone());
        info!(
            ticker,
            benchmark,
            alpha = report.attribution.regression.alpha,
            r_squared = report.attribution.regression.r_squared,
            "asset attribution complete"
        );
        Ok(report)
    }

    /// Attribute a weighted portfolio against the configured benchmark.
    ///
    /// # Errors
    /// See [`FactorAnalyzer::analyze_portfolio_against`].
    pub fn analyze_portfolio(
        &mut self,
        tickers: &[&str],
        weights: Option<&[f64]>,
    ) -> Result<PortfolioReport, ModelError> {
        let benchmark = self.config.benchmark.clone();
        self.analyze_portfolio_against(tickers, weights, benchmark.as_str())
    }

    /// Attribute a weighted portfolio against `benchmark`.
    ///
    /// Weights default to equal allocation and are normalized to sum to one.
    /// Every constituent and the benchmark are aligned to their common dates
    /// before the weights are applied.
    ///
    /// # Errors
    /// - `ModelError::InsufficientConstituents` for fewer than two tickers
    /// - `ModelError::Series` if weights are malformed or mismatched in length
    /// - `ModelError::TickerNotFound` if any ticker is missing
    /// - estimator errors as in [`FactorAnalyzer::analyze_asset_against`]
    pub fn analyze_portfolio_against(
        &mut self,
        tickers: &[&str],
        weights: Option<&[f64]>,
        benchmark: &str,
    ) -> Result<PortfolioReport, ModelError> {
        let mut tracker = StageTracker::new(format!("portfolio[{}]", tickers.join(",")));
        let result = self.run_portfolio(tickers, weights, benchmark, &mut tracker);
        self.finish(&mut tracker, result.as_ref().err());

        let report = result?;
        info!(
            n_constituents = tickers.len(),
            benchmark,
            alpha = report.attribution.regression.alpha,
            r_squared = report.attribution.regression.r_squared,
            "portfolio attribution complete"
        );
        Ok(report)
    }

    fn finish(&mut self, tracker: &mut StageTracker, err: Option<&ModelError>) {
        match err {
            Some(err) => tracker.fail(err),
            None => tracker.advance(),
        }
        self.last_stage = tracker.stage();
    }

    fn run_asset(
        &self,
        ticker: &str,
        benchmark: &str,
        tracker: &mut StageTracker,
    ) -> Result<AssetReport, ModelError> {
        self.config.validate()?;
        let asset = self.series(ticker)?.returns();
        let market = self.series(benchmark)?.returns();

        let aligned = align_return_series(&[&asset, &market])?;
        tracker.advance();

        let attribution = self.attribute(&aligned[0], &aligned[1], benchmark, tracker)?;
        Ok(AssetReport { ticker: ticker.into(), attribution })
    }

    fn run_portfolio(
        &self,
        tickers: &[&str],
        weights: Option<&[f64]>,
        benchmark: &str,
        tracker: &mut StageTracker,
    ) -> Result<PortfolioReport, ModelError> {
        if tickers.len() < MIN_CONSTITUENTS {
            return Err(ModelError::InsufficientConstituents {
                required: MIN_CONSTITUENTS,
                actual: tickers.len(),
            });
        }
        self.config.validate()?;

        let weights = match weights {
            Some(raw) if raw.len() != tickers.len() => {
                return Err(SeriesError::InvalidWeights(format!(
                    "{} weights for {} tickers",
                    raw.len(),
                    tickers.len()
                ))
                .into());
            }
            Some(raw) => PortfolioWeights::from_raw(raw)?,
            None => PortfolioWeights::equal(tickers.len())?,
        };

        let mut returns = tickers
            .iter()
            .map(|t| self.series(t).map(PriceSeries::returns))
            .collect::<Result<Vec<_>, _>>()?;
        returns.push(self.series(benchmark)?.returns());

        let aligned = align_return_series(&returns.iter().collect::<Vec<_>>())?;
        let Some((market, constituents)) = aligned.split_last() else {
            return Err(EstimatorError::Alignment("no aligned series".into()).into());
        };

        let dates = market.dates().to_vec();
        let values: Vec<f64> = (0..dates.len())
            .map(|t| {
                constituents
                    .iter()
                    .zip(weights.as_slice())
                    .map(|(r, w)| w * r.values()[t])
                    .sum::<f64>()
            })
            .collect();
        let portfolio = ReturnSeries::new(dates, values)?;
        tracker.advance();

        let attribution = self.attribute(&portfolio, market, benchmark, tracker)?;
        Ok(PortfolioReport {
            tickers: tickers.iter().map(|&t| Symbol::from(t)).collect(),
            weights: weights.as_slice().to_vec(),
            attribution,
        })
    }

    /// Build factors, regress and interpret over date-aligned inputs.
    fn attribute(
        &self,
        returns: &ReturnSeries,
        market: &ReturnSeries,
        benchmark: &str,
        tracker: &mut StageTracker,
    ) -> Result<Attribution, ModelError> {
        let table = FactorBuilder::new(self.config.risk_free).build(market)?;
        let placeholders = table.placeholder_names();
        let design = if self.config.include_placeholder_factors {
            table
        } else {
            if !placeholders.is_empty() {
                warn!(
                    factors = ?placeholders,
                    "placeholder factors excluded; attribution uses informative factors only"
                );
            }
            table.informative()
        };
        tracker.advance();

        let excess = returns.excess_over(self.config.risk_free.per_period());
        let regression = FactorRegression::with_config(RegressionConfig {
            significance_level: self.config.significance_level,
        });
        let fitted = regression.estimate(&excess, &design)?;
        tracker.advance();

        let interpretation = regression.interpret(&fitted);
        tracker.advance();

        Ok(Attribution {
            benchmark: benchmark.into(),
            regression: fitted,
            interpretation,
            placeholder_factors: if self.config.include_placeholder_factors {
                Vec::new()
            } else {
                placeholders
            },
        })
    }
}
