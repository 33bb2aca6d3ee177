//! Counterparty products lens: one counterparty's volume breakdown.

use super::{LabeledSeries, filled_series};
use crate::datasets::Datasets;
use itaipu_data::records::CounterpartyProductRecord;
use itaipu_series::{YearSelection, sum_by};
use serde::Serialize;

/// KPI tiles of the counterparty lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterpartyKpis {
    /// Total energy volume, MWm.
    pub energy_volume: f64,
    /// Conventional volume, MWm.
    pub con_volume: f64,
    /// Incentivized-source volume, MWm.
    pub source_volume: f64,
    /// Total notional exposure.
    pub face_value: f64,
    /// Total mark-to-market.
    pub mtm: f64,
    /// Total P&L.
    pub profit_loss: f64,
}

/// View model of the counterparty lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterpartyView {
    /// The counterparty in focus.
    pub counterparty: String,
    /// KPI block; `None` when the counterparty has no rows.
    pub kpis: Option<CounterpartyKpis>,
    /// Seven-line volume breakdown, month grain.
    pub volumes: Vec<LabeledSeries>,
}

/// Build the counterparty lens for one counterparty.
pub fn build(datasets: &Datasets, counterparty: &str, year: YearSelection) -> CounterpartyView {
    let rows: Vec<&CounterpartyProductRecord> = datasets
        .counterparty_products
        .iter()
        .filter(|r| r.counterparty == counterparty)
        .filter(|r| year.matches(r.year))
        .collect();

    let kpis = (!rows.is_empty()).then(|| CounterpartyKpis {
        energy_volume: sum_by(&rows, |r| r.energy_volume),
        con_volume: sum_by(&rows, |r| r.con_volume),
        source_volume: sum_by(&rows, |r| r.source_volume),
        face_value: sum_by(&rows, |r| r.face_value),
        mtm: sum_by(&rows, |r| r.mtm),
        profit_loss: sum_by(&rows, |r| r.profit_loss),
    });

    let volumes = match year {
        YearSelection::Specific(year) => product_volume_series(&rows, year),
        YearSelection::All => Vec::new(),
    };

    CounterpartyView {
        counterparty: counterparty.to_string(),
        kpis,
        volumes,
    }
}

/// The seven volume series of a counterparty's product breakdown.
pub(crate) fn product_volume_series(
    rows: &[&CounterpartyProductRecord],
    year: i32,
) -> Vec<LabeledSeries> {
    let series = |label: &str, value: fn(&CounterpartyProductRecord) -> f64| {
        LabeledSeries::new(label, filled_series(rows, year, |r| r.month, value))
    };
    vec![
        series("Energia", |r| r.energy_volume),
        series("Convencional", |r| r.con_volume),
        series("Incentivada", |r| r.source_volume),
        series("SE", |r| r.volume_se),
        series("S", |r| r.volume_s),
        series("NE", |r| r.volume_ne),
        series("N", |r| r.volume_n),
    ]
}
