//! Net-positions lens: volumes, prices, MtM and P&L for a filtered
//! slice of the book.

use super::filled_series;
use crate::datasets::Datasets;
use itaipu_data::records::PmixRecord;
use itaipu_series::{MONTHS_PER_YEAR, MonthlyPoint, PositionFilter, sum_by, weighted_average};
use serde::Serialize;

/// KPI tiles of the net lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetKpis {
    /// Total net volume, MWm.
    pub net_volume: f64,
    /// Total mark-to-market.
    pub mtm: f64,
    /// Total P&L.
    pub profit_loss: f64,
    /// Total notional exposure.
    pub face_value: f64,
    /// Volume-weighted average buy price.
    pub avg_buy_price: f64,
    /// Volume-weighted average sell price.
    pub avg_sell_price: f64,
}

/// View model of the net-positions lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetView {
    /// KPI block; `None` when nothing matches the filter.
    pub kpis: Option<NetKpis>,
    /// Monthly net volume.
    pub volume: Vec<MonthlyPoint>,
    /// Flat annual-average line next to the volume series.
    pub consolidated_volume: Vec<MonthlyPoint>,
    /// Monthly volume-weighted buy price.
    pub buy_price: Vec<MonthlyPoint>,
    /// Monthly volume-weighted sell price.
    pub sell_price: Vec<MonthlyPoint>,
    /// Monthly mark-to-market.
    pub mtm: Vec<MonthlyPoint>,
    /// Monthly P&L.
    pub profit_loss: Vec<MonthlyPoint>,
}

/// Build the net lens for one filter selection.
pub fn build(datasets: &Datasets, filter: &PositionFilter) -> NetView {
    let positions = filter.apply_positions(&datasets.net);
    let pmix: Vec<&PmixRecord> = datasets
        .pmix
        .iter()
        .filter(|p| filter.matches_pmix(p))
        .collect();

    let kpis = (!positions.is_empty()).then(|| NetKpis {
        net_volume: sum_by(&positions, |p| p.net_volume),
        mtm: sum_by(&positions, |p| p.mtm),
        profit_loss: sum_by(&positions, |p| p.profit_loss),
        face_value: sum_by(&positions, |p| p.face_value),
        avg_buy_price: weighted_average(&pmix, |p| p.buy_pmix, |p| p.net_volume),
        avg_sell_price: weighted_average(&pmix, |p| p.sell_pmix, |p| p.net_volume),
    });

    match filter.year {
        Some(year) => {
            let volume = filled_series(&positions, year, |p| p.month, |p| p.net_volume);
            let monthly_avg = sum_by(&volume, |pt| pt.value) / f64::from(MONTHS_PER_YEAR);
            let consolidated_volume = volume
                .iter()
                .map(|pt| MonthlyPoint {
                    value: monthly_avg,
                    ..pt.clone()
                })
                .collect();
            NetView {
                kpis,
                consolidated_volume,
                buy_price: price_series(&pmix, year, |p| p.buy_pmix),
                sell_price: price_series(&pmix, year, |p| p.sell_pmix),
                mtm: filled_series(&positions, year, |p| p.month, |p| p.mtm),
                profit_loss: filled_series(&positions, year, |p| p.month, |p| p.profit_loss),
                volume,
            }
        }
        // All-years mode has no month grain.
        None => NetView {
            kpis,
            volume: Vec::new(),
            consolidated_volume: Vec::new(),
            buy_price: Vec::new(),
            sell_price: Vec::new(),
            mtm: Vec::new(),
            profit_loss: Vec::new(),
        },
    }
}

/// Per-month volume-weighted price. Months with no volume read 0,
/// which the charts render as a gap.
fn price_series(
    pmix: &[&PmixRecord],
    year: i32,
    price: impl Fn(&PmixRecord) -> f64,
) -> Vec<MonthlyPoint> {
    (1..=MONTHS_PER_YEAR)
        .map(|month| {
            let of_month: Vec<&PmixRecord> = pmix
                .iter()
                .copied()
                .filter(|p| p.year == year && p.month == month)
                .collect();
            MonthlyPoint {
                year,
                month,
                value: weighted_average(&of_month, |p| price(p), |p| p.net_volume),
            }
        })
        .collect()
}
