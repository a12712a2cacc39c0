//! Normal Q-Q plot data.

use factorscope_math::normal_quantile;
use serde::{Deserialize, Serialize};

use crate::StatsError;

/// Paired theoretical and sample quantiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QqPlot {
    /// Standard normal quantiles at `i / (N + 1)`, `i = 1..=N`.
    pub theoretical: Vec<f64>,
    /// Sorted sample values.
    pub sample: Vec<f64>,
}

/// Build Q-Q plot data against the standard normal distribution.
///
/// # Errors
/// - `StatsError::EmptyInput` if `values` is empty
/// - `StatsError::NonFiniteInput` if any value is NaN or infinite
pub fn qq_plot(values: &[f64]) -> Result<QqPlot, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteInput);
    }

    let mut sample = values.to_vec();
    sample.sort_by(f64::total_cmp);

    let denom = (sample.len() + 1) as f64;
    let theoretical = (1..=sample.len())
        .map(|i| normal_quantile(i as f64 / denom))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QqPlot { theoretical, sample })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn both_axes_non_decreasing() {
        let qq = qq_plot(&[0.03, -0.01, 0.0, 0.02, -0.04, 0.01]).unwrap();
        assert_eq!(qq.theoretical.len(), 6);
        assert!(qq.sample.windows(2).all(|w| w[0] <= w[1]));
        assert!(qq.theoretical.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn odd_length_median_is_zero() {
        let qq = qq_plot(&[3.0, 1.0, 2.0]).unwrap();
        assert_eq!(qq.sample, vec![1.0, 2.0, 3.0]);
        assert_relative_eq!(qq.theoretical[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(qq.theoretical[0], -qq.theoretical[2], epsilon = 1e-12);
        assert_relative_eq!(qq.theoretical[2], 0.674_489_750_196_081_7, epsilon = 1e-9);
    }

    #[test]
    fn single_value() {
        let qq = qq_plot(&[0.5]).unwrap();
        assert_relative_eq!(qq.theoretical[0], 0.0, epsilon = 1e-12);
        assert_eq!(qq.sample, vec![0.5]);
    }

    #[test]
    fn empty_rejected() {
        assert!(matches!(qq_plot(&[]), Err(StatsError::EmptyInput)));
    }
}
