//! Error types for return-series diagnostics.

use factorscope_math::MathError;

/// Errors that can occur while computing diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The return series has no elements.
    #[error("empty return series")]
    EmptyInput,

    /// The return series has zero variance.
    #[error("degenerate return series: zero variance")]
    DegenerateInput,

    /// The return series contains NaN or infinite values.
    #[error("return series contains non-finite values")]
    NonFiniteInput,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Math operation error.
    #[error("math error: {0}")]
    Math(#[from] MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StatsError::InvalidConfig("bad parameter".to_string());
        assert!(err.to_string().contains("bad parameter"));
        assert_eq!(StatsError::EmptyInput.to_string(), "empty return series");
    }
}
