//! Factor construction.

use factorscope_primitives::{
    FactorAvailability, FactorName, FactorSeries, FactorTable, ReturnSeries, RiskFreeRate,
};
use factorscope_traits::{Factor, FactorError};
use tracing::debug;

/// Market excess return: benchmark return minus the per-period risk-free rate.
#[derive(Debug, Clone, Copy)]
pub struct MarketFactor {
    risk_free: RiskFreeRate,
}

impl MarketFactor {
    /// Create a market factor over `risk_free`.
    #[must_use]
    pub const fn new(risk_free: RiskFreeRate) -> Self {
        Self { risk_free }
    }
}

impl Factor for MarketFactor {
    fn name(&self) -> FactorName {
        FactorName::Market
    }

    fn compute(&self, reference: &ReturnSeries) -> Result<FactorSeries, FactorError> {
        if reference.is_empty() {
            return Err(FactorError::EmptyInput);
        }
        let rf = self.risk_free.per_period();
        Ok(FactorSeries::available(
            self.name(),
            reference.values().iter().map(|r| r - rf).collect(),
        ))
    }
}

/// Zero-information stand-in for a factor that needs cross-sectional firm data.
///
/// Size and value factors are built from portfolios sorted on market
/// capitalization and book-to-market; neither input is available here, so the
/// series is all zeros and tagged [`FactorAvailability::Placeholder`].
#[derive(Debug, Clone, Copy)]
pub struct PlaceholderFactor {
    name: FactorName,
}

impl PlaceholderFactor {
    /// Create a placeholder for `name`.
    #[must_use]
    pub const fn new(name: FactorName) -> Self {
        Self { name }
    }
}

impl Factor for PlaceholderFactor {
    fn name(&self) -> FactorName {
        self.name
    }

    fn availability(&self) -> FactorAvailability {
        FactorAvailability::Placeholder
    }

    fn compute(&self, reference: &ReturnSeries) -> Result<FactorSeries, FactorError> {
        Ok(FactorSeries::placeholder(self.name, reference.len()))
    }
}

/// Builds a [`FactorTable`] dated like a benchmark return series.
pub struct FactorBuilder {
    factors: Vec<Box<dyn Factor>>,
}

impl std::fmt::Debug for FactorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FactorBuilder")
            .field("factors", &self.factors.iter().map(|x| x.name()).collect::<Vec<_>>())
            .finish()
    }
}

impl FactorBuilder {
    /// Three-factor builder: MKT from the benchmark, SMB and HML as placeholders.
    #[must_use]
    pub fn new(risk_free: RiskFreeRate) -> Self {
        Self::with_factors(vec![
            Box::new(MarketFactor::new(risk_free)),
            Box::new(PlaceholderFactor::new(FactorName::Size)),
            Box::new(PlaceholderFactor::new(FactorName::Value)),
        ])
    }

    /// Builder over an explicit factor list, in design-matrix order.
    #[must_use]
    pub fn with_factors(factors: Vec<Box<dyn Factor>>) -> Self {
        Self { factors }
    }

    /// Names of the configured factors.
    #[must_use]
    pub fn names(&self) -> Vec<FactorName> {
        self.factors.iter().map(|f| f.name()).collect()
    }

    /// Compute every factor against `benchmark`.
    ///
    /// # Errors
    /// Returns `FactorError::EmptyInput` for an empty benchmark, or the first
    /// error raised by a factor.
    pub fn build(&self, benchmark: &ReturnSeries) -> Result<FactorTable, FactorError> {
        if benchmark.is_empty() {
            return Err(FactorError::EmptyInput);
        }
        let columns = self
            .factors
            .iter()
            .map(|f| {
                let mut series = f.compute(benchmark)?;
                series.availability = f.availability();
                Ok(series)
            })
            .collect::<Result<Vec<_>, FactorError>>()?;
        debug!(
            n_dates = benchmark.len(),
            factors = ?self.names(),
            "factor table built"
        );
        Ok(FactorTable::new(benchmark.dates().to_vec(), columns)?)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use factorscope_primitives::Date;

    use super::*;

    fn benchmark() -> ReturnSeries {
        let dates = (2..6).map(|d| Date::from_ymd_opt(2024, 1, d).unwrap()).collect();
        ReturnSeries::new(dates, vec![0.01, -0.005, 0.002, 0.0]).unwrap()
    }

    #[test]
    fn market_factor_subtracts_daily_rate() {
        let factor = MarketFactor::new(RiskFreeRate::new(0.05));
        let series = factor.compute(&benchmark()).unwrap();
        let rf = 0.000_193_630_506_543_973_6;
        assert_eq!(series.name, FactorName::Market);
        assert!(!series.is_placeholder());
        assert_relative_eq!(series.values[0], 0.01 - rf, epsilon = 1e-12);
        assert_relative_eq!(series.values[3], -rf, epsilon = 1e-12);
    }

    #[test]
    fn market_factor_zero_rate_is_identity() {
        let series = MarketFactor::new(RiskFreeRate::zero()).compute(&benchmark()).unwrap();
        assert_eq!(series.values, benchmark().values());
    }

    #[test]
    fn placeholders_are_labelled_zeros() {
        let factor = PlaceholderFactor::new(FactorName::Value);
        assert_eq!(factor.availability(), FactorAvailability::Placeholder);
        let series = factor.compute(&benchmark()).unwrap();
        assert!(series.is_placeholder());
        assert_eq!(series.values, vec![0.0; 4]);
    }

    #[test]
    fn builder_produces_three_factor_table() {
        let table = FactorBuilder::new(RiskFreeRate::default()).build(&benchmark()).unwrap();
        assert_eq!(table.names(), FactorName::ALL.to_vec());
        assert_eq!(table.len(), 4);
        assert_eq!(table.dates(), benchmark().dates());
        assert_eq!(table.placeholder_names(), vec![FactorName::Size, FactorName::Value]);
        assert_eq!(table.informative().names(), vec![FactorName::Market]);
    }

    struct Unsourced;

    impl Factor for Unsourced {
        fn name(&self) -> FactorName {
            FactorName::Value
        }

        fn availability(&self) -> FactorAvailability {
            FactorAvailability::Placeholder
        }

        fn compute(&self, reference: &ReturnSeries) -> Result<FactorSeries, FactorError> {
            Ok(FactorSeries::available(self.name(), vec![0.5; reference.len()]))
        }
    }

    #[test]
    fn builder_tags_columns_from_factor_availability() {
        let builder = FactorBuilder::with_factors(vec![
            Box::new(MarketFactor::new(RiskFreeRate::zero())),
            Box::new(Unsourced),
        ]);
        let table = builder.build(&benchmark()).unwrap();
        assert_eq!(table.placeholder_names(), vec![FactorName::Value]);
        assert_eq!(table.informative().names(), vec![FactorName::Market]);
    }

    #[test]
    fn empty_benchmark_rejected() {
        let result = FactorBuilder::new(RiskFreeRate::default()).build(&ReturnSeries::default());
        assert!(matches!(result, Err(FactorError::EmptyInput)));
    }
}
