//! Credit-risk lens for one counterparty: exposure KPIs and monthly
//! exposure/EL series.

use super::filled_series;
use crate::datasets::Datasets;
use itaipu_data::records::{CreditExposureMonthRecord, CreditExposureRecord};
use itaipu_series::{MonthlyPoint, YearSelection, sum_by};
use serde::Serialize;

/// Annual exposure KPIs for one counterparty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditExposureKpis {
    /// Internal rating code.
    pub rating: String,
    /// Expected positive exposure.
    pub epe: f64,
    /// Potential future exposure for the year.
    pub pfe_year: f64,
    /// Credit CVaR for the year.
    pub cvar_year: f64,
    /// Expected loss on the EPE measure.
    pub el_epe: f64,
    /// Expected loss on the PFE measure.
    pub el_pfe_year: f64,
    /// Expected loss on the CVaR measure.
    pub el_cvar_year: f64,
    /// Realized P&L for the year.
    pub profit_loss_year: f64,
    /// P&L ceiling.
    pub profit_loss_limit: f64,
}

impl CreditExposureKpis {
    pub(crate) fn from_record(rec: &CreditExposureRecord) -> Self {
        Self {
            rating: rec.rating.clone(),
            epe: rec.epe,
            pfe_year: rec.pfe_year,
            cvar_year: rec.cvar_year,
            el_epe: rec.el_epe,
            el_pfe_year: rec.el_pfe_year,
            el_cvar_year: rec.el_cvar_year,
            profit_loss_year: rec.profit_loss_year,
            profit_loss_limit: rec.profit_loss_limit,
        }
    }
}

/// Net-position totals of the counterparty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetTotals {
    /// Total net volume, MWm.
    pub net_volume: f64,
    /// Total notional exposure.
    pub face_value: f64,
    /// Total mark-to-market.
    pub mtm: f64,
    /// Total P&L.
    pub profit_loss: f64,
}

/// View model of the credit lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreditView {
    /// The counterparty in focus.
    pub counterparty: String,
    /// Annual exposure KPIs; `None` when the counterparty is not on the
    /// credit sheet.
    pub exposure: Option<CreditExposureKpis>,
    /// Net-position totals; `None` without position rows.
    pub positions: Option<NetTotals>,
    /// Monthly expected exposure.
    pub ee: Vec<MonthlyPoint>,
    /// Monthly potential future exposure.
    pub pfe: Vec<MonthlyPoint>,
    /// Monthly credit CVaR.
    pub cvar: Vec<MonthlyPoint>,
    /// Monthly EL on the EE measure.
    pub el_ee: Vec<MonthlyPoint>,
    /// Monthly EL on the PFE measure.
    pub el_pfe: Vec<MonthlyPoint>,
    /// Monthly EL on the CVaR measure.
    pub el_cvar: Vec<MonthlyPoint>,
}

/// Build the credit lens for one counterparty.
pub fn build(datasets: &Datasets, counterparty: &str, year: YearSelection) -> CreditView {
    let exposure = datasets
        .credit
        .iter()
        .find(|r| r.counterparty == counterparty)
        .map(CreditExposureKpis::from_record);

    let position_rows: Vec<_> = datasets
        .counterparties
        .iter()
        .filter(|r| r.counterparty == counterparty)
        .filter(|r| year.matches(r.year))
        .collect();
    let positions = (!position_rows.is_empty()).then(|| NetTotals {
        net_volume: sum_by(&position_rows, |r| r.net_volume),
        face_value: sum_by(&position_rows, |r| r.face_value),
        mtm: sum_by(&position_rows, |r| r.mtm),
        profit_loss: sum_by(&position_rows, |r| r.profit_loss),
    });

    let (ee, pfe, cvar, el_ee, el_pfe, el_cvar) = match year {
        YearSelection::Specific(year) => {
            let rows: Vec<&CreditExposureMonthRecord> = datasets
                .credit_month
                .iter()
                .filter(|r| r.counterparty == counterparty && r.year == year)
                .collect();
            (
                filled_series(&rows, year, |r| r.month, |r| r.ee),
                filled_series(&rows, year, |r| r.month, |r| r.pfe),
                filled_series(&rows, year, |r| r.month, |r| r.cvar),
                filled_series(&rows, year, |r| r.month, |r| r.el_ee),
                filled_series(&rows, year, |r| r.month, |r| r.el_pfe),
                filled_series(&rows, year, |r| r.month, |r| r.el_cvar),
            )
        }
        // Month charts are suppressed in all-years mode.
        YearSelection::All => Default::default(),
    };

    CreditView {
        counterparty: counterparty.to_string(),
        exposure,
        positions,
        ee,
        pfe,
        cvar,
        el_ee,
        el_pfe,
        el_cvar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use itaipu_data::raw::{FromRaw, RawRow};
    use itaipu_data::records::CounterpartyRecord;

    fn datasets() -> Datasets {
        let mut d = Datasets::empty();
        d.credit.push(CreditExposureRecord::from_raw(&RawRow::from_pairs([
            ("counterparty", "Geradora B"),
            ("rating", "2B"),
            ("EPE", "1000"),
            ("EL_PFE_year", "120"),
            ("profitLossLimit", "500"),
        ])));
        d.credit_month
            .push(CreditExposureMonthRecord::from_raw(&RawRow::from_pairs([
                ("counterparty", "Geradora B"),
                ("year", "2025"),
                ("month", "4"),
                ("PFE", "210"),
                ("EL_PFE", "12"),
            ])));
        d.counterparties
            .push(CounterpartyRecord::from_raw(&RawRow::from_pairs([
                ("counterparty", "Geradora B"),
                ("year", "2025"),
                ("month", "4"),
                ("netVolume", "3.5"),
                ("MtM", "70"),
            ])));
        d
    }

    #[test]
    fn test_specific_year_builds_filled_series() {
        let view = build(&datasets(), "Geradora B", YearSelection::Specific(2025));
        assert_eq!(view.pfe.len(), 12);
        assert_relative_eq!(view.pfe[3].value, 210.0);
        assert_relative_eq!(view.el_pfe[3].value, 12.0);
        assert_relative_eq!(view.pfe[0].value, 0.0);
        let exposure = view.exposure.unwrap();
        assert_eq!(exposure.rating, "2B");
        assert_relative_eq!(exposure.el_pfe_year, 120.0);
        assert_relative_eq!(view.positions.unwrap().net_volume, 3.5);
    }

    #[test]
    fn test_all_years_suppresses_month_charts() {
        let view = build(&datasets(), "Geradora B", YearSelection::All);
        assert!(view.pfe.is_empty());
        assert!(view.exposure.is_some());
        assert!(view.positions.is_some());
    }

    #[test]
    fn test_unknown_counterparty_is_well_formed() {
        let view = build(&datasets(), "Distribuidora C", YearSelection::Specific(2025));
        assert!(view.exposure.is_none());
        assert!(view.positions.is_none());
        assert_eq!(view.pfe.len(), 12);
        assert!(view.pfe.iter().all(|p| p.value == 0.0));
    }
}
