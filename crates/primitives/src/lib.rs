#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod asset;
pub use asset::Symbol;

mod prices;
pub use prices::{PriceMap, PriceSeries};

mod returns;
pub use returns::ReturnSeries;

mod factor;
pub use factor::{FactorAvailability, FactorName, FactorSeries, FactorTable};

mod rates;
pub use rates::{RiskFreeRate, TRADING_DAYS_PER_YEAR};

mod weights;
pub use weights::PortfolioWeights;

mod error;
pub use error::SeriesError;

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
