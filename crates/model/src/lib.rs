#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod factors;
pub use factors::{FactorBuilder, MarketFactor, PlaceholderFactor};

mod regression;
pub use regression::{ALPHA_KEY, FactorRegression, RegressionConfig, RegressionResult};

mod interpret;
pub use interpret::{
    AlphaSignificance, FactorAnnotation, FitQuality, Interpretation, SIGNIFICANT_MARKER, interpret,
};

mod stage;
pub use stage::AnalysisStage;

mod analyzer;
pub use analyzer::{FactorAnalyzer, MIN_CONSTITUENTS};

pub mod report;
pub use report::{AnalysisReport, AssetReport, Attribution, ErrorPayload, PortfolioReport};

mod config;
pub use config::AnalyzerConfig;

mod error;
pub use error::{ErrorKind, ModelError};

/// Re-export commonly used types.
pub mod prelude {
    pub use factorscope_traits::{Factor, ReturnsEstimator};

    pub use super::{AnalyzerConfig, FactorAnalyzer, FactorRegression, ModelError};
}
