//! Reading a fitted factor model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{ALPHA_KEY, RegressionResult};

/// Significance marker for a factor whose p-value clears the threshold.
pub const SIGNIFICANT_MARKER: &str = "*";

/// Classification of the intercept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaSignificance {
    /// Positive and significant.
    SignificantPositive,
    /// Negative and significant.
    SignificantNegative,
    /// Not distinguishable from zero.
    Insignificant,
}

/// Explanatory power of the fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitQuality {
    /// R-squared above 0.7.
    Strong,
    /// R-squared above 0.4, up to 0.7.
    Moderate,
    /// R-squared at most 0.4, or undefined.
    Weak,
}

impl FitQuality {
    /// Classify an R-squared value.
    #[must_use]
    pub fn from_r_squared(r_squared: f64) -> Self {
        if r_squared > 0.7 {
            Self::Strong
        } else if r_squared > 0.4 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// One factor's loading with its test outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorAnnotation {
    /// Factor loading.
    pub beta: f64,
    /// Two-sided p-value of the loading.
    pub p_value: f64,
    /// Whether `p_value` is below the significance level.
    pub significant: bool,
    /// [`SIGNIFICANT_MARKER`] when significant, empty otherwise.
    pub marker: String,
}

/// Presentational reading of a [`RegressionResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// Alpha classification.
    pub alpha: AlphaSignificance,
    /// Alpha reading with its value and p-value.
    pub alpha_interpretation: String,
    /// Per-factor annotations, keyed by factor name.
    pub factors: BTreeMap<String, FactorAnnotation>,
    /// Fit grade.
    pub fit: FitQuality,
    /// Fit reading with the R-squared value.
    pub overall_assessment: String,
}

/// Classify alpha, annotate factors and grade the fit at `significance_level`.
///
/// A NaN p-value never counts as significant.
#[must_use]
pub fn interpret(result: &RegressionResult, significance_level: f64) -> Interpretation {
    let alpha_p = result.p_values.get(ALPHA_KEY).copied().unwrap_or(f64::NAN);
    let alpha = result.alpha;

    let (class, alpha_interpretation) = if alpha_p < significance_level && alpha > 0.0 {
        (
            AlphaSignificance::SignificantPositive,
            format!(
                "significant positive alpha ({alpha:.4}): \
                 returns exceed what factor exposure explains"
            ),
        )
    } else if alpha_p < significance_level && alpha < 0.0 {
        (
            AlphaSignificance::SignificantNegative,
            format!(
                "significant negative alpha ({alpha:.4}): \
                 returns trail what factor exposure explains"
            ),
        )
    } else {
        (
            AlphaSignificance::Insignificant,
            format!(
                "alpha ({alpha:.4}) not significant (p={alpha_p:.3}): \
                 returns are explained by factor exposure"
            ),
        )
    };

    let factors = result
        .betas
        .iter()
        .filter(|(name, _)| name.as_str() != ALPHA_KEY)
        .map(|(name, &beta)| {
            let p_value = result.p_values.get(name).copied().unwrap_or(f64::NAN);
            let significant = p_value < significance_level;
            let marker = if significant { SIGNIFICANT_MARKER } else { "" };
            (name.clone(), FactorAnnotation { beta, p_value, significant, marker: marker.into() })
        })
        .collect();

    let fit = FitQuality::from_r_squared(result.r_squared);
    let overall_assessment = if result.r_squared.is_nan() {
        "explanatory power undefined: excess returns have no variance to explain".to_string()
    } else {
        let assessment = match fit {
            FitQuality::Strong => "strong explanatory power (R² > 0.7)",
            FitQuality::Moderate => "moderate explanatory power (0.4 < R² ≤ 0.7)",
            FitQuality::Weak => "weak explanatory power (R² ≤ 0.4): other factors needed",
        };
        format!("{assessment} (R²={:.3})", result.r_squared)
    };

    Interpretation {
        alpha: class,
        alpha_interpretation,
        factors,
        fit,
        overall_assessment,
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn result(alpha: f64, alpha_p: f64, mkt_p: f64, r_squared: f64) -> RegressionResult {
        let keyed = |a: f64, m: f64| {
            BTreeMap::from([(ALPHA_KEY.to_string(), a), ("MKT".to_string(), m)])
        };
        RegressionResult {
            alpha,
            betas: keyed(alpha, 1.1),
            std_errors: keyed(0.001, 0.05),
            t_stats: keyed(2.0, 22.0),
            p_values: keyed(alpha_p, mkt_p),
            r_squared,
            adj_r_squared: r_squared,
            dates: Vec::new(),
            residuals: Vec::new(),
            n_obs: 100,
            dof: 98,
        }
    }

    #[rstest]
    #[case(0.0012, 0.01, AlphaSignificance::SignificantPositive)]
    #[case(-0.0012, 0.01, AlphaSignificance::SignificantNegative)]
    #[case(0.0012, 0.2, AlphaSignificance::Insignificant)]
    #[case(-0.0012, 0.05, AlphaSignificance::Insignificant)]
    #[case(0.0, f64::NAN, AlphaSignificance::Insignificant)]
    fn alpha_classification(
        #[case] alpha: f64,
        #[case] p: f64,
        #[case] expected: AlphaSignificance,
    ) {
        assert_eq!(interpret(&result(alpha, p, 0.01, 0.5), 0.05).alpha, expected);
    }

    #[rstest]
    #[case(0.95, FitQuality::Strong)]
    #[case(0.7, FitQuality::Moderate)]
    #[case(0.41, FitQuality::Moderate)]
    #[case(0.4, FitQuality::Weak)]
    #[case(f64::NAN, FitQuality::Weak)]
    fn fit_grades(#[case] r_squared: f64, #[case] expected: FitQuality) {
        assert_eq!(FitQuality::from_r_squared(r_squared), expected);
    }

    #[test]
    fn texts_carry_values() {
        let reading = interpret(&result(0.0012, 0.2, 0.01, 0.8123), 0.05);
        assert!(reading.alpha_interpretation.contains("0.0012"));
        assert!(reading.alpha_interpretation.contains("p=0.200"));
        assert!(reading.overall_assessment.starts_with("strong"));
        assert!(reading.overall_assessment.ends_with("(R²=0.812)"));
    }

    #[test]
    fn undefined_fit_has_its_own_reading() {
        let reading = interpret(&result(0.0, f64::NAN, f64::NAN, f64::NAN), 0.05);
        assert_eq!(reading.fit, FitQuality::Weak);
        assert!(reading.overall_assessment.starts_with("explanatory power undefined"));
        assert!(!reading.overall_assessment.contains("weak"));
        assert!(!reading.overall_assessment.contains("NaN"));
    }

    #[test]
    fn factor_markers() {
        let reading = interpret(&result(0.0, 0.5, 0.01, 0.5), 0.05);
        let mkt = &reading.factors["MKT"];
        assert!(mkt.significant);
        assert_eq!(mkt.marker, SIGNIFICANT_MARKER);
        assert_eq!(reading.factors.len(), 1);

        let reading = interpret(&result(0.0, 0.5, 0.3, 0.5), 0.05);
        assert!(!reading.factors["MKT"].significant);
        assert!(reading.factors["MKT"].marker.is_empty());
    }
}
