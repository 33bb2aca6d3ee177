#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltaic-energia/itaipu/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bucket;
pub mod distribution;
pub mod market;
pub mod screens;

pub use bucket::{RiskBucket, TARGET_TOTAL_PMA};
pub use distribution::{BucketRow, RiskDistribution, distribute};
pub use market::MarketRiskKpis;
pub use screens::CounterpartyScreen;
