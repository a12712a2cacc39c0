#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod align;
pub use align::{AlignedColumns, DatedColumn, align_on_dates, align_return_series};

mod frame;
pub use frame::prices_from_frame;

mod error;
pub use error::UtilsError;
