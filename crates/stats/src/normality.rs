//! Jarque-Bera normality test.

use factorscope_math::chi_squared_sf;
use serde::{Deserialize, Serialize};

use crate::{StatsError, insight};

/// Result of a Jarque-Bera test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalityTest {
    /// `n / 6 * (S^2 + K^2 / 4)` with `K` the excess kurtosis.
    pub statistic: f64,
    /// Upper tail of chi-square with two degrees of freedom.
    pub p_value: f64,
    /// Display form of `p_value`.
    pub p_value_display: String,
    /// True iff `p_value` exceeds the significance level.
    pub is_normal: bool,
    /// Plain-language reading of the result.
    pub interpretation: String,
}

/// Run the Jarque-Bera test from precomputed moments.
///
/// # Errors
/// Returns `StatsError::Math` if the chi-square distribution cannot be evaluated.
pub fn jarque_bera(
    n: usize,
    skewness: f64,
    excess_kurtosis: f64,
    significance_level: f64,
) -> Result<NormalityTest, StatsError> {
    let statistic =
        n as f64 / 6.0 * (skewness * skewness + excess_kurtosis * excess_kurtosis / 4.0);
    let p_value = chi_squared_sf(statistic, 2.0)?;
    let is_normal = p_value > significance_level;

    Ok(NormalityTest {
        statistic,
        p_value,
        p_value_display: insight::format_p_value(p_value),
        is_normal,
        interpretation: insight::interpret_normality(is_normal).to_string(),
    })
}
