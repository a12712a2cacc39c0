//! Reference distributions used for quantiles and hypothesis tests.

use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

use crate::MathError;

/// Inverse CDF of the standard normal distribution.
///
/// # Errors
/// Returns `MathError::Distribution` unless `0 < p < 1`.
pub fn normal_quantile(p: f64) -> Result<f64, MathError> {
    if !(p > 0.0 && p < 1.0) {
        return Err(MathError::Distribution(format!("probability {p} outside (0, 1)")));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| MathError::Distribution(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

/// Upper tail probability `P(X > x)` of a chi-square distribution.
///
/// # Errors
/// Returns `MathError::Distribution` if `dof` is not positive.
pub fn chi_squared_sf(x: f64, dof: f64) -> Result<f64, MathError> {
    let chi2 = ChiSquared::new(dof).map_err(|e| MathError::Distribution(e.to_string()))?;
    Ok(chi2.sf(x))
}

/// Two-sided p-value of a t-statistic against zero.
///
/// NaN statistics propagate to a NaN p-value.
///
/// # Errors
/// Returns `MathError::Distribution` if `dof` is not positive.
pub fn students_t_two_sided_p(t: f64, dof: f64) -> Result<f64, MathError> {
    let dist =
        StudentsT::new(0.0, 1.0, dof).map_err(|e| MathError::Distribution(e.to_string()))?;
    if t.is_nan() {
        return Ok(f64::NAN);
    }
    Ok((2.0 * dist.sf(t.abs())).min(1.0))
}
