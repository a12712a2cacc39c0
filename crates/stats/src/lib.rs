#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod config;
pub use config::StatsConfig;

mod descriptive;
pub use descriptive::{Statistics, describe};

mod normality;
pub use normality::{NormalityTest, jarque_bera};

mod risk;
pub use risk::{RiskInsight, risk_insight};

mod histogram;
pub use histogram::{DEFAULT_BINS, Histogram, histogram};

mod qq;
pub use qq::{QqPlot, qq_plot};

mod acf;
pub use acf::{AutocorrelationProfile, DEFAULT_LAGS, autocorrelation};

pub mod insight;
pub use insight::Insights;

mod ticker;
pub use ticker::{PriceHistory, TickerReport, analyze_ticker};

mod error;
pub use error::StatsError;
