//! Risk-free rate conversion.

use serde::{Deserialize, Serialize};

/// Trading days per year.
pub const TRADING_DAYS_PER_YEAR: u32 = 252;

/// Annualized risk-free rate with its compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskFreeRate {
    /// Annual rate, e.g. `0.05` for 5%.
    pub annual: f64,
    /// Compounding periods per year.
    pub periods_per_year: u32,
}

impl RiskFreeRate {
    /// Create a daily-compounded rate on the 252-day convention.
    #[must_use]
    pub const fn new(annual: f64) -> Self {
        Self { annual, periods_per_year: TRADING_DAYS_PER_YEAR }
    }

    /// A zero rate.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0)
    }

    /// Geometric per-period rate `(1 + annual)^(1 / periods) - 1`.
    #[must_use]
    pub fn per_period(&self) -> f64 {
        (1.0 + self.annual).powf(1.0 / f64::from(self.periods_per_year)) - 1.0
    }
}

impl Default for RiskFreeRate {
    fn default() -> Self {
        Self::new(0.05)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn daily_rate_compounds_back_to_annual() {
        let rate = RiskFreeRate::new(0.05);
        let daily = rate.per_period();
        assert_relative_eq!((1.0 + daily).powi(252), 1.05, epsilon = 1e-12);
        assert_relative_eq!(daily, 0.000_193_630_506_5, epsilon = 1e-12);
    }

    #[test]
    fn zero_rate() {
        assert_eq!(RiskFreeRate::zero().per_period(), 0.0);
    }
}
