//! One pure view-model builder per dashboard lens.
//!
//! Builders are total functions `(datasets, filters) -> view model`:
//! empty datasets give empty series and `None` KPI blocks, never a
//! panic. Month-grain series exist only when a specific year is
//! selected; the all-years mode carries accumulated KPIs instead.

use itaipu_series::{MonthlyPoint, fill_months, monthly_series};
use serde::Serialize;

pub mod bilateral;
pub mod counterparty;
pub mod credit;
pub mod market;
pub mod net;
pub mod portfolio;
pub mod products;

pub use bilateral::{BilateralFocus, BilateralView, CounterpartyCard};
pub use counterparty::{CounterpartyKpis, CounterpartyView};
pub use credit::{CreditExposureKpis, CreditView, NetTotals};
pub use market::MarketView;
pub use net::{NetKpis, NetView};
pub use portfolio::PortfolioView;
pub use products::{ProductKpis, ProductsView};

/// A chart series with its legend label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledSeries {
    /// Legend label.
    pub label: String,
    /// The points, always twelve when month grain applies.
    pub points: Vec<MonthlyPoint>,
}

impl LabeledSeries {
    /// Label a series.
    pub fn new(label: impl Into<String>, points: Vec<MonthlyPoint>) -> Self {
        Self {
            label: label.into(),
            points,
        }
    }
}

/// Group, sum and 12-fill one field of the rows into a monthly series.
pub(crate) fn filled_series<T>(
    rows: &[&T],
    year: i32,
    month_of: impl Fn(&T) -> u32,
    value: impl Fn(&T) -> f64,
) -> Vec<MonthlyPoint> {
    let series = monthly_series(rows, year, |r| month_of(r), |r| value(r));
    let default = MonthlyPoint {
        year,
        month: 0,
        value: 0.0,
    };
    fill_months(&series, year, &default)
}
