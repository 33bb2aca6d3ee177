//! Typed records decoded from the dataset sheets.
//!
//! One struct per sheet, fields matching the export pipeline's columns.
//! Decoding goes through [`FromRaw`](crate::raw::FromRaw) and is total:
//! numeric fields default to `0.0`, strings to `""`, so every record is
//! safe to sum without null checks.

mod credit;
mod positions;
mod risk;

pub use credit::{CreditExposureMonthRecord, CreditExposureRecord};
pub use positions::{
    CounterpartyProductRecord, CounterpartyRecord, NetPosition, PmixRecord, ProductRecord,
};
pub use risk::{RiskMonthRecord, RiskYearRecord};
