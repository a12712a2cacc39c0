//! Plain-language readings of distribution statistics.
//!
//! Shape thresholds sit at `|x| = 0.5`. A value exactly on a threshold takes
//! the informative reading rather than the neutral one.

use serde::{Deserialize, Serialize};

use crate::Statistics;

const SHAPE_THRESHOLD: f64 = 0.5;

/// Reading for a NaN moment.
pub const UNDEFINED: &str = "undefined (zero-variance series)";

/// Collected readings for one return series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insights {
    /// Reading of the skewness.
    pub skewness: String,
    /// Reading of the excess kurtosis.
    pub kurtosis: String,
    /// Reading of the Jarque-Bera outcome.
    pub normality: String,
    /// Value-at-risk narrative.
    pub value_at_risk: String,
}

impl Insights {
    /// Derive all readings from computed statistics.
    #[must_use]
    pub fn from_statistics(stats: &Statistics) -> Self {
        Self {
            skewness: interpret_skewness(stats.skewness).to_string(),
            kurtosis: interpret_kurtosis(stats.kurtosis).to_string(),
            normality: stats.normality.interpretation.clone(),
            value_at_risk: stats.risk.interpretation.clone(),
        }
    }
}

/// Read the sign and size of the skewness.
#[must_use]
pub fn interpret_skewness(skewness: f64) -> &'static str {
    if skewness.is_nan() {
        UNDEFINED
    } else if skewness.abs() < SHAPE_THRESHOLD {
        "approximately symmetric"
    } else if skewness > 0.0 {
        "right-tailed, rare strong up-moves"
    } else {
        "left-tailed, rare strong down-moves (elevated downside risk)"
    }
}

/// Read the size of the excess kurtosis.
#[must_use]
pub fn interpret_kurtosis(excess_kurtosis: f64) -> &'static str {
    if excess_kurtosis.is_nan() {
        UNDEFINED
    } else if excess_kurtosis.abs() < SHAPE_THRESHOLD {
        "tails like a normal distribution"
    } else if excess_kurtosis > 0.0 {
        "fat tails, frequent extreme moves"
    } else {
        "thin tails, more predictable returns"
    }
}

/// Read the Jarque-Bera outcome.
#[must_use]
pub const fn interpret_normality(is_normal: bool) -> &'static str {
    if is_normal {
        "consistent with a normal distribution"
    } else {
        "not normally distributed; normal-based risk models may understate tail risk"
    }
}

/// Describe the historical value-at-risk at `percentile` percent.
#[must_use]
pub fn value_at_risk_narrative(value_at_risk: f64, percentile: f64) -> String {
    if value_at_risk < 0.0 {
        format!(
            "{percentile}% chance of a one-period loss exceeding {:.2}%",
            -value_at_risk * 100.0
        )
    } else {
        format!(
            "{percentile}% chance of a one-period return below {:.2}%; no loss at this level",
            value_at_risk * 100.0
        )
    }
}

/// Format a p-value: scientific below 0.001, four decimals otherwise.
///
/// The exponent is signed and at least two digits wide, as in `1.23e-04`.
#[must_use]
pub fn format_p_value(p_value: f64) -> String {
    if p_value >= 0.001 || p_value.is_nan() {
        return format!("{p_value:.4}");
    }
    let formatted = format!("{p_value:.2e}");
    match formatted.split_once('e').map(|(m, e)| (m, e.parse::<i32>())) {
        Some((mantissa, Ok(exponent))) => {
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.0, "approximately symmetric")]
    #[case(0.49, "approximately symmetric")]
    #[case(-0.49, "approximately symmetric")]
    #[case(0.5, "right-tailed, rare strong up-moves")]
    #[case(1.7, "right-tailed, rare strong up-moves")]
    #[case(-0.5, "left-tailed, rare strong down-moves (elevated downside risk)")]
    #[case(-2.0, "left-tailed, rare strong down-moves (elevated downside risk)")]
    #[case(f64::NAN, UNDEFINED)]
    fn skewness_readings(#[case] skew: f64, #[case] expected: &str) {
        assert_eq!(interpret_skewness(skew), expected);
    }

    #[rstest]
    #[case(0.2, "tails like a normal distribution")]
    #[case(0.5, "fat tails, frequent extreme moves")]
    #[case(6.0, "fat tails, frequent extreme moves")]
    #[case(-0.5, "thin tails, more predictable returns")]
    #[case(-1.5, "thin tails, more predictable returns")]
    #[case(f64::NAN, UNDEFINED)]
    fn kurtosis_readings(#[case] kurt: f64, #[case] expected: &str) {
        assert_eq!(interpret_kurtosis(kurt), expected);
    }

    #[rstest]
    #[case(0.000_123_4, "1.23e-04")]
    #[case(1.5e-12, "1.50e-12")]
    #[case(2.5e-120, "2.50e-120")]
    #[case(0.0, "0.00e+00")]
    #[case(0.001, "0.0010")]
    #[case(0.857_678_336_803_977, "0.8577")]
    #[case(f64::NAN, "NaN")]
    fn p_value_display(#[case] p_value: f64, #[case] expected: &str) {
        assert_eq!(format_p_value(p_value), expected);
    }

    #[test]
    fn var_narrative() {
        let text = value_at_risk_narrative(-0.0231, 5.0);
        assert_eq!(text, "5% chance of a one-period loss exceeding 2.31%");

        let text = value_at_risk_narrative(0.004, 5.0);
        assert!(text.contains("0.40%"));
        assert!(text.contains("no loss"));
    }
}
