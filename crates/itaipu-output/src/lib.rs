#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/voltaic-energia/itaipu/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;
pub mod format;
pub mod report;

pub use export::{ExportError, export_series, export_table};
pub use format::{MONTH_ABBREV, brl, month_abbrev, number, percent};
pub use report::{KpiBlock, KpiTile, Report, ReportError, TextTable};
