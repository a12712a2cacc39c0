//! # factorscope
//!
//! Distribution diagnostics and factor attribution for daily price series.
//!
//! This crate re-exports the factorscope workspace crates. Individual
//! components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Price, return and factor series types
//! - `traits`: Factor and estimator abstractions
//! - `math`: Moments, distributions and OLS
//! - `stats`: Return-series diagnostics and insights
//! - `model`: Factor construction, regression and orchestration
//! - `utils`: Date alignment and data-frame loading
//! - `cli`: The `analyze` binary
//!
//! ## Example
//!
//! ```rust,ignore
//! use factorscope::model::FactorAnalyzer;
//!
//! let mut analyzer = FactorAnalyzer::new(prices);
//! let report = analyzer.analyze_portfolio(&["AAPL", "MSFT"], None)?;
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use factorscope_primitives as primitives;
#[cfg(feature = "traits")]
#[doc(inline)]
pub use factorscope_traits as traits;
#[cfg(feature = "math")]
#[doc(inline)]
pub use factorscope_math as math;
#[cfg(feature = "stats")]
#[doc(inline)]
pub use factorscope_stats as stats;
#[cfg(feature = "model")]
#[doc(inline)]
pub use factorscope_model as model;
#[cfg(feature = "utils")]
#[doc(inline)]
pub use factorscope_utils as utils;
