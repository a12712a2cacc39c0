#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod moments;
pub use moments::{Moments, percentile};

mod distributions;
pub use distributions::{chi_squared_sf, normal_quantile, students_t_two_sided_p};

mod linalg;
pub use linalg::{OlsResult, add_intercept, ordinary_least_squares};

mod error;
pub use error::MathError;
