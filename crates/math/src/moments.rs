//! Population moments and percentiles.

use crate::MathError;

/// Central moments of a sample, using population (biased) normalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moments {
    /// Number of observations.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Second central moment (population variance).
    pub m2: f64,
    /// Third central moment.
    pub m3: f64,
    /// Fourth central moment.
    pub m4: f64,
}

impl Moments {
    /// Compute moments of `data`.
    ///
    /// # Errors
    /// Returns `MathError::EmptyData` if `data` is empty.
    pub fn from_slice(data: &[f64]) -> Result<Self, MathError> {
        if data.is_empty() {
            return Err(MathError::EmptyData);
        }

        let n = data.len();
        let nf = n as f64;
        let mean = data.iter().sum::<f64>() / nf;

        let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
        for x in data {
            let d = x - mean;
            let d2 = d * d;
            m2 += d2;
            m3 += d2 * d;
            m4 += d2 * d2;
        }

        Ok(Self { n, mean, m2: m2 / nf, m3: m3 / nf, m4: m4 / nf })
    }

    /// Population standard deviation.
    #[must_use]
    pub fn std(&self) -> f64 {
        self.m2.sqrt()
    }

    /// Skewness `m3 / m2^1.5`; NaN when the variance is zero.
    #[must_use]
    pub fn skewness(&self) -> f64 {
        if self.m2 > 0.0 { self.m3 / self.m2.powf(1.5) } else { f64::NAN }
    }

    /// Excess kurtosis `m4 / m2^2 - 3`; NaN when the variance is zero.
    #[must_use]
    pub fn excess_kurtosis(&self) -> f64 {
        if self.m2 > 0.0 { self.m4 / (self.m2 * self.m2) - 3.0 } else { f64::NAN }
    }
}

/// Percentile of `data` with linear interpolation between closest ranks.
///
/// `pct` is expressed in percent, e.g. `5.0` for the 5th percentile.
///
/// # Errors
/// Returns error if `data` is empty or `pct` lies outside `[0, 100]`.
pub fn percentile(data: &[f64], pct: f64) -> Result<f64, MathError> {
    if data.is_empty() {
        return Err(MathError::EmptyData);
    }
    if !(0.0..=100.0).contains(&pct) {
        return Err(MathError::InvalidPercentile(pct));
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    Ok(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
