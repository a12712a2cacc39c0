//! OLS factor regression.

use std::collections::BTreeMap;

use factorscope_math::{MathError, add_intercept, ordinary_least_squares};
use factorscope_primitives::{Date, FactorTable, ReturnSeries};
use factorscope_traits::{EstimatorError, ReturnsEstimator};
use factorscope_utils::{DatedColumn, align_on_dates};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Interpretation, interpret};

/// Key of the intercept in the coefficient maps.
pub const ALPHA_KEY: &str = "alpha";

/// Configuration for [`FactorRegression`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionConfig {
    /// Significance level for coefficient tests.
    pub significance_level: f64,
}

impl Default for RegressionConfig {
    fn default() -> Self {
        Self { significance_level: 0.05 }
    }
}

/// Fitted factor model.
///
/// `betas`, `std_errors`, `t_stats` and `p_values` share one key set: every
/// factor name plus [`ALPHA_KEY`], whose beta entry equals `alpha`. A
/// coefficient with zero standard error has NaN t-statistic and p-value, and a
/// constant dependent series has NaN R-squared; both serialize to JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Intercept.
    pub alpha: f64,
    /// Coefficients, intercept included.
    pub betas: BTreeMap<String, f64>,
    /// Coefficient standard errors.
    pub std_errors: BTreeMap<String, f64>,
    /// Two-sided t-statistics against zero.
    pub t_stats: BTreeMap<String, f64>,
    /// Two-sided p-values.
    pub p_values: BTreeMap<String, f64>,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// R-squared adjusted for the number of regressors.
    pub adj_r_squared: f64,
    /// Aligned observation dates.
    pub dates: Vec<Date>,
    /// Residuals, one per aligned date.
    pub residuals: Vec<f64>,
    /// Number of aligned observations.
    pub n_obs: usize,
    /// Residual degrees of freedom.
    pub dof: usize,
}

impl RegressionResult {
    /// Loading on `factor`, if it was in the design.
    #[must_use]
    pub fn beta(&self, factor: &str) -> Option<f64> {
        self.betas.get(factor).copied()
    }

    /// Residuals as a dated series.
    ///
    /// # Errors
    /// Returns `EstimatorError::Series` if the stored dates are inconsistent.
    pub fn residual_series(&self) -> Result<ReturnSeries, EstimatorError> {
        Ok(ReturnSeries::new(self.dates.clone(), self.residuals.clone())?)
    }
}

/// Ordinary least squares of excess returns on a factor table, with intercept.
#[derive(Debug, Clone, Default)]
pub struct FactorRegression {
    config: RegressionConfig,
}

impl FactorRegression {
    /// Create a regression with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &RegressionConfig {
        &self.config
    }

    /// Interpret a fitted result at the configured significance level.
    #[must_use]
    pub fn interpret(&self, result: &RegressionResult) -> Interpretation {
        interpret(result, self.config.significance_level)
    }
}

impl ReturnsEstimator for FactorRegression {
    type Config = RegressionConfig;
    type Output = RegressionResult;

    fn with_config(config: Self::Config) -> Self {
        Self { config }
    }

    fn estimate(
        &self,
        excess_returns: &ReturnSeries,
        factors: &FactorTable,
    ) -> Result<RegressionResult, EstimatorError> {
        let mut inputs = vec![DatedColumn::from(excess_returns)];
        inputs.extend(
            factors.factors().iter().map(|f| DatedColumn::new(factors.dates(), &f.values)),
        );
        let aligned =
            align_on_dates(&inputs).map_err(|e| EstimatorError::Alignment(e.to_string()))?;

        let n = aligned.len();
        let k = factors.n_factors();
        if n <= k + 1 {
            return Err(EstimatorError::InsufficientData { required: k + 2, actual: n });
        }

        let y = Array1::from_vec(aligned.columns[0].clone());
        let mut x = Array2::<f64>::zeros((n, k));
        for (j, column) in aligned.columns[1..].iter().enumerate() {
            x.column_mut(j).assign(&Array1::from_vec(column.clone()));
        }

        let mut keys = vec![ALPHA_KEY.to_string()];
        keys.extend(factors.names().iter().map(|name| name.as_str().to_string()));

        let ols = ordinary_least_squares(&y, &add_intercept(&x)).map_err(|e| match e {
            MathError::Singular => EstimatorError::SingularDesign { columns: keys.clone() },
            MathError::Underdetermined { observations, parameters } => {
                EstimatorError::InsufficientData { required: parameters + 1, actual: observations }
            }
            other => EstimatorError::LinearAlgebra(other.to_string()),
        })?;

        let keyed = |values: &Array1<f64>| -> BTreeMap<String, f64> {
            keys.iter().cloned().zip(values.iter().copied()).collect()
        };

        debug!(n_obs = n, n_factors = k, r_squared = ols.r_squared, "regression fitted");

        Ok(RegressionResult {
            alpha: ols.coefficients[0],
            betas: keyed(&ols.coefficients),
            std_errors: keyed(&ols.std_errors),
            t_stats: keyed(&ols.t_stats),
            p_values: keyed(&ols.p_values),
            r_squared: ols.r_squared,
            adj_r_squared: ols.adj_r_squared,
            dates: aligned.dates,
            residuals: ols.residuals.to_vec(),
            n_obs: n,
            dof: ols.dof,
        })
    }
}
