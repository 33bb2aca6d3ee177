//! Portfolio products lens: volume rollups per product dimension.

use super::{LabeledSeries, filled_series};
use crate::datasets::Datasets;
use itaipu_data::records::ProductRecord;
use itaipu_series::{MonthlyPoint, ProductDimension, YearSelection, sum_by};
use serde::Serialize;

/// KPI tiles of the products lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductKpis {
    /// Total energy volume, MWm.
    pub energy_volume: f64,
    /// Total notional exposure.
    pub face_value: f64,
    /// Total mark-to-market.
    pub mtm: f64,
    /// Total P&L.
    pub profit_loss: f64,
}

/// View model of the products lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductsView {
    /// Selected decomposition dimension.
    pub dimension: ProductDimension,
    /// KPI block; `None` when nothing matches.
    pub kpis: Option<ProductKpis>,
    /// Volume series for the selected dimension.
    pub volumes: Vec<LabeledSeries>,
    /// Monthly notional exposure.
    pub face_value: Vec<MonthlyPoint>,
    /// Monthly mark-to-market.
    pub mtm: Vec<MonthlyPoint>,
    /// Monthly P&L.
    pub profit_loss: Vec<MonthlyPoint>,
}

/// Build the products lens.
pub fn build(
    datasets: &Datasets,
    year: YearSelection,
    dimension: ProductDimension,
    maturation: Option<&str>,
) -> ProductsView {
    let rows: Vec<&ProductRecord> = datasets
        .products
        .iter()
        .filter(|r| year.matches(r.year))
        .filter(|r| maturation.is_none_or(|m| r.maturation == m))
        .collect();

    let kpis = (!rows.is_empty()).then(|| ProductKpis {
        energy_volume: sum_by(&rows, |r| r.energy_volume),
        face_value: sum_by(&rows, |r| r.face_value),
        mtm: sum_by(&rows, |r| r.mtm),
        profit_loss: sum_by(&rows, |r| r.profit_loss),
    });

    match year {
        YearSelection::Specific(year) => ProductsView {
            dimension,
            kpis,
            volumes: volume_series(&rows, year, dimension),
            face_value: filled_series(&rows, year, |r| r.month, |r| r.face_value),
            mtm: filled_series(&rows, year, |r| r.month, |r| r.mtm),
            profit_loss: filled_series(&rows, year, |r| r.month, |r| r.profit_loss),
        },
        YearSelection::All => ProductsView {
            dimension,
            kpis,
            volumes: Vec::new(),
            face_value: Vec::new(),
            mtm: Vec::new(),
            profit_loss: Vec::new(),
        },
    }
}

fn volume_series(
    rows: &[&ProductRecord],
    year: i32,
    dimension: ProductDimension,
) -> Vec<LabeledSeries> {
    let series = |label: &str, value: fn(&ProductRecord) -> f64| {
        LabeledSeries::new(label, filled_series(rows, year, |r| r.month, value))
    };
    match dimension {
        ProductDimension::Energy => vec![series("Energia", |r| r.energy_volume)],
        ProductDimension::Source => vec![
            series("Incentivada", |r| r.source_volume),
            series("Convencional", |r| r.con_volume),
        ],
        ProductDimension::Submarket => vec![
            series("SE", |r| r.volume_se),
            series("S", |r| r.volume_s),
            series("NE", |r| r.volume_ne),
            series("N", |r| r.volume_n),
        ],
    }
}
