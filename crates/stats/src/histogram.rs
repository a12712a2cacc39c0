//! Equal-width histogram.

use serde::{Deserialize, Serialize};

use crate::StatsError;

/// Default number of bins.
pub const DEFAULT_BINS: usize = 20;

/// Histogram of a return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Midpoint of each bin.
    pub bin_centers: Vec<f64>,
    /// Observations per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Total number of counted observations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// Bins are half-open except the last, which includes `max`. A constant series
/// yields a single bin centred on the constant.
///
/// # Errors
/// - `StatsError::EmptyInput` if `values` is empty
/// - `StatsError::NonFiniteInput` if any value is NaN or infinite
/// - `StatsError::InvalidConfig` if `bins` is zero
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram, StatsError> {
    if values.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    if bins == 0 {
        return Err(StatsError::InvalidConfig("histogram needs at least one bin".into()));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(StatsError::NonFiniteInput);
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

    if max == min {
        return Ok(Histogram { bin_centers: vec![min], counts: vec![values.len()] });
    }

    let span = max - min;
    let edges: Vec<f64> = (0..=bins).map(|i| min + span * i as f64 / bins as f64).collect();
    let mut counts = vec![0usize; bins];

    for &v in values {
        let mut idx = (((v - min) / span) * bins as f64) as usize;
        // Float rounding can put a value one bin off its edges.
        if idx > 0 && idx < bins && v < edges[idx] {
            idx -= 1;
        } else if idx + 1 < bins && v >= edges[idx + 1] {
            idx += 1;
        }
        counts[idx.min(bins - 1)] += 1;
    }

    let bin_centers = edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect();
    Ok(Histogram { bin_centers, counts })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn counts_sum_to_length() {
        let values: Vec<f64> = (0..137).map(|i| ((i * 37) % 101) as f64 / 1000.0 - 0.05).collect();
        let hist = histogram(&values, DEFAULT_BINS).unwrap();
        assert_eq!(hist.counts.len(), DEFAULT_BINS);
        assert_eq!(hist.bin_centers.len(), DEFAULT_BINS);
        assert_eq!(hist.total(), values.len());
    }

    #[test]
    fn maximum_lands_in_last_bin() {
        let hist = histogram(&[0.0, 1.0, 2.0, 3.0, 4.0], 4).unwrap();
        assert_eq!(hist.counts, vec![1, 1, 1, 2]);
        assert_relative_eq!(hist.bin_centers[0], 0.5);
        assert_relative_eq!(hist.bin_centers[3], 3.5);
    }

    #[test]
    fn centers_are_evenly_spaced() {
        let hist = histogram(&[-0.02, 0.0, 0.03], 5).unwrap();
        let width = 0.05 / 5.0;
        assert_relative_eq!(hist.bin_centers[0], -0.02 + width / 2.0, epsilon = 1e-15);
        for pair in hist.bin_centers.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], width, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_series_single_bin() {
        let hist = histogram(&[0.01; 7], DEFAULT_BINS).unwrap();
        assert_eq!(hist.bin_centers, vec![0.01]);
        assert_eq!(hist.counts, vec![7]);
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(histogram(&[], 10), Err(StatsError::EmptyInput)));
        assert!(matches!(histogram(&[1.0, 2.0], 0), Err(StatsError::InvalidConfig(_))));
        assert!(matches!(histogram(&[1.0, f64::NAN], 3), Err(StatsError::NonFiniteInput)));
    }
}
