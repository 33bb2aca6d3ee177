//! Market-risk lens math over the downside-risk sheets.
//!
//! The yearly sheet drives the KPI tiles; the monthly sheet drives the
//! chart series. Percentage contributions are taken as given in
//! single-year mode and recomputed from summed absolutes in accumulated
//! mode.

use itaipu_data::records::{RiskMonthRecord, RiskYearRecord};
use itaipu_series::{MonthlyPoint, ProductDimension, RiskMeasure, fill_months, monthly_series};
use serde::{Deserialize, Serialize};

/// KPI tile values for the market-risk lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRiskKpis {
    /// Which measure the tiles report.
    pub measure: RiskMeasure,
    /// Total VaR or CVaR.
    pub risk_total: f64,
    /// Mark-to-market total.
    pub mtm: f64,
    /// Notional exposure.
    pub face_value: f64,
    /// Stressed P&L under the selected measure's scenario.
    pub stressed_pl: f64,
    /// Energy share of the measure, as a fraction.
    pub pct_energy: f64,
    /// Source share of the measure, as a fraction.
    pub pct_source: f64,
    /// Submarket share of the measure, as a fraction.
    pub pct_submarket: f64,
}

impl MarketRiskKpis {
    /// KPIs for one year, straight from the yearly sheet.
    ///
    /// `None` when the year has no row.
    pub fn for_year(records: &[RiskYearRecord], year: i32, measure: RiskMeasure) -> Option<Self> {
        let rec = records.iter().find(|r| r.year == year)?;
        let (risk_total, stressed_pl, pct_energy, pct_source, pct_submarket) = match measure {
            RiskMeasure::VaR => (
                rec.var_total,
                rec.stressed_pl_var,
                rec.pct_var_energy,
                rec.pct_var_source,
                rec.pct_var_submarket,
            ),
            RiskMeasure::CVaR => (
                rec.cvar_total,
                rec.stressed_pl_cvar,
                rec.pct_cvar_energy,
                rec.pct_cvar_source,
                rec.pct_cvar_submarket,
            ),
        };
        Some(Self {
            measure,
            risk_total,
            mtm: rec.mtm,
            face_value: rec.face_value,
            stressed_pl,
            pct_energy,
            pct_source,
            pct_submarket,
        })
    }

    /// Accumulated KPIs across every year on the sheet.
    ///
    /// Absolute values are summed; the three dimension shares are
    /// recomputed from the summed absolute per-dimension risk rather
    /// than averaged from the per-year shares. Zero total risk yields
    /// zero shares.
    pub fn accumulated(records: &[RiskYearRecord], measure: RiskMeasure) -> Self {
        let mut risk_total = 0.0;
        let mut stressed_pl = 0.0;
        let mut mtm = 0.0;
        let mut face_value = 0.0;
        let mut energy = 0.0;
        let mut source = 0.0;
        let mut submarket = 0.0;
        for rec in records {
            mtm += rec.mtm;
            face_value += rec.face_value;
            match measure {
                RiskMeasure::VaR => {
                    risk_total += rec.var_total;
                    stressed_pl += rec.stressed_pl_var;
                    energy += rec.var_energy.abs();
                    source += rec.var_source.abs();
                    submarket += rec.var_submarket.abs();
                }
                RiskMeasure::CVaR => {
                    risk_total += rec.cvar_total;
                    stressed_pl += rec.stressed_pl_cvar;
                    energy += rec.cvar_energy.abs();
                    source += rec.cvar_source.abs();
                    submarket += rec.cvar_submarket.abs();
                }
            }
        }
        let dimension_total = energy + source + submarket;
        let share = |part: f64| {
            if dimension_total == 0.0 {
                0.0
            } else {
                part / dimension_total
            }
        };
        Self {
            measure,
            risk_total,
            mtm,
            face_value,
            stressed_pl,
            pct_energy: share(energy),
            pct_source: share(source),
            pct_submarket: share(submarket),
        }
    }
}

fn measure_total(rec: &RiskMonthRecord, measure: RiskMeasure) -> f64 {
    match measure {
        RiskMeasure::VaR => rec.var_total,
        RiskMeasure::CVaR => rec.cvar_total,
    }
}

fn measure_for(rec: &RiskMonthRecord, measure: RiskMeasure, dimension: ProductDimension) -> f64 {
    match (measure, dimension) {
        (RiskMeasure::VaR, ProductDimension::Energy) => rec.var_energy,
        (RiskMeasure::VaR, ProductDimension::Source) => rec.var_source,
        (RiskMeasure::VaR, ProductDimension::Submarket) => rec.var_submarket,
        (RiskMeasure::CVaR, ProductDimension::Energy) => rec.cvar_energy,
        (RiskMeasure::CVaR, ProductDimension::Source) => rec.cvar_source,
        (RiskMeasure::CVaR, ProductDimension::Submarket) => rec.cvar_submarket,
    }
}

fn pct_for(rec: &RiskMonthRecord, measure: RiskMeasure, dimension: ProductDimension) -> f64 {
    match (measure, dimension) {
        (RiskMeasure::VaR, ProductDimension::Energy) => rec.pct_var_energy,
        (RiskMeasure::VaR, ProductDimension::Source) => rec.pct_var_source,
        (RiskMeasure::VaR, ProductDimension::Submarket) => rec.pct_var_submarket,
        (RiskMeasure::CVaR, ProductDimension::Energy) => rec.pct_cvar_energy,
        (RiskMeasure::CVaR, ProductDimension::Source) => rec.pct_cvar_source,
        (RiskMeasure::CVaR, ProductDimension::Submarket) => rec.pct_cvar_submarket,
    }
}

fn filled(
    records: &[RiskMonthRecord],
    year: i32,
    value: impl Fn(&RiskMonthRecord) -> f64,
) -> Vec<MonthlyPoint> {
    let of_year: Vec<&RiskMonthRecord> = records.iter().filter(|r| r.year == year).collect();
    let series = monthly_series(&of_year, year, |r| r.month, |r| value(r));
    let default = MonthlyPoint {
        year,
        month: 0,
        value: 0.0,
    };
    fill_months(&series, year, &default)
}

/// Twelve-month total-risk series for one year.
pub fn monthly_risk_total(
    records: &[RiskMonthRecord],
    year: i32,
    measure: RiskMeasure,
) -> Vec<MonthlyPoint> {
    filled(records, year, |r| measure_total(r, measure))
}

/// Twelve-month per-dimension risk series for one year.
pub fn monthly_risk_by_dimension(
    records: &[RiskMonthRecord],
    year: i32,
    measure: RiskMeasure,
    dimension: ProductDimension,
) -> Vec<MonthlyPoint> {
    filled(records, year, |r| measure_for(r, measure, dimension))
}

/// Twelve-month percentage-contribution series for one year.
pub fn monthly_pct_by_dimension(
    records: &[RiskMonthRecord],
    year: i32,
    measure: RiskMeasure,
    dimension: ProductDimension,
) -> Vec<MonthlyPoint> {
    filled(records, year, |r| pct_for(r, measure, dimension))
}

/// Twelve-month stressed P&L series under the measure's scenario.
pub fn monthly_stressed_pl(
    records: &[RiskMonthRecord],
    year: i32,
    measure: RiskMeasure,
) -> Vec<MonthlyPoint> {
    filled(records, year, |r| match measure {
        RiskMeasure::VaR => r.stressed_pl_var,
        RiskMeasure::CVaR => r.stressed_pl_cvar,
    })
}

/// Twelve-month unstressed P&L series.
pub fn monthly_profit_loss(records: &[RiskMonthRecord], year: i32) -> Vec<MonthlyPoint> {
    filled(records, year, |r| r.profit_loss)
}

/// Twelve-month supporting-volume series per product dimension.
///
/// One labeled series for energy, two for source (incentivized and
/// conventional), four for the submarket decomposition.
pub fn monthly_volumes(
    records: &[RiskMonthRecord],
    year: i32,
    dimension: ProductDimension,
) -> Vec<(&'static str, Vec<MonthlyPoint>)> {
    match dimension {
        ProductDimension::Energy => {
            vec![("Energia", filled(records, year, |r| r.energy_volume))]
        }
        ProductDimension::Source => vec![
            ("Incentivada", filled(records, year, |r| r.source_volume)),
            ("Convencional", filled(records, year, |r| r.con_volume)),
        ],
        ProductDimension::Submarket => vec![
            ("SE", filled(records, year, |r| r.volume_se)),
            ("S", filled(records, year, |r| r.volume_s)),
            ("NE", filled(records, year, |r| r.volume_ne)),
            ("N", filled(records, year, |r| r.volume_n)),
        ],
    }
}
