#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltaic-energia/itaipu/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod calendar;
pub mod filter;

pub use aggregate::{MonthlyPoint, monthly_series, monthly_totals, sum_by, weighted_average};
pub use calendar::{CalendarSlot, MONTHS_PER_YEAR, fill_months};
pub use filter::{PositionFilter, ProductDimension, RiskMeasure, Submarket, YearSelection};
