//! Market-risk lens: VaR/CVaR KPIs and monthly decompositions.

use super::LabeledSeries;
use crate::datasets::Datasets;
use itaipu_risk::MarketRiskKpis;
use itaipu_risk::market::{
    monthly_pct_by_dimension, monthly_profit_loss, monthly_risk_by_dimension, monthly_risk_total,
    monthly_stressed_pl, monthly_volumes,
};
use itaipu_series::{MonthlyPoint, ProductDimension, RiskMeasure, YearSelection};
use serde::Serialize;

/// View model of the market-risk lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketView {
    /// Selected measure.
    pub measure: RiskMeasure,
    /// Selected decomposition dimension.
    pub dimension: ProductDimension,
    /// KPI block; `None` when the yearly sheet has no data for the
    /// selection.
    pub kpis: Option<MarketRiskKpis>,
    /// Monthly total risk.
    pub risk_total: Vec<MonthlyPoint>,
    /// Monthly risk attributed to the selected dimension.
    pub risk_dimension: Vec<MonthlyPoint>,
    /// Monthly percentage contribution of the selected dimension.
    pub pct_dimension: Vec<MonthlyPoint>,
    /// Monthly stressed P&L under the measure's scenario.
    pub stressed_pl: Vec<MonthlyPoint>,
    /// Monthly unstressed P&L.
    pub profit_loss: Vec<MonthlyPoint>,
    /// Supporting volumes for the selected dimension.
    pub volumes: Vec<LabeledSeries>,
}

/// Build the market-risk lens.
pub fn build(
    datasets: &Datasets,
    year: YearSelection,
    measure: RiskMeasure,
    dimension: ProductDimension,
) -> MarketView {
    match year {
        YearSelection::Specific(year) => MarketView {
            measure,
            dimension,
            kpis: MarketRiskKpis::for_year(&datasets.risk_year, year, measure),
            risk_total: monthly_risk_total(&datasets.risk_month, year, measure),
            risk_dimension: monthly_risk_by_dimension(
                &datasets.risk_month,
                year,
                measure,
                dimension,
            ),
            pct_dimension: monthly_pct_by_dimension(&datasets.risk_month, year, measure, dimension),
            stressed_pl: monthly_stressed_pl(&datasets.risk_month, year, measure),
            profit_loss: monthly_profit_loss(&datasets.risk_month, year),
            volumes: monthly_volumes(&datasets.risk_month, year, dimension)
                .into_iter()
                .map(|(label, points)| LabeledSeries::new(label, points))
                .collect(),
        },
        YearSelection::All => MarketView {
            measure,
            dimension,
            kpis: (!datasets.risk_year.is_empty())
                .then(|| MarketRiskKpis::accumulated(&datasets.risk_year, measure)),
            risk_total: Vec::new(),
            risk_dimension: Vec::new(),
            pct_dimension: Vec::new(),
            stressed_pl: Vec::new(),
            profit_loss: Vec::new(),
            volumes: Vec::new(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use itaipu_data::raw::{FromRaw, RawRow};
    use itaipu_data::records::{RiskMonthRecord, RiskYearRecord};

    fn datasets() -> Datasets {
        let mut d = Datasets::empty();
        d.risk_year.push(RiskYearRecord::from_raw(&RawRow::from_pairs([
            ("year", "2025"),
            (" VaR_total ", "-900"),
            (" mtm ", "1200"),
            ("percentageVaRenergy", "0.55"),
        ])));
        d.risk_month.push(RiskMonthRecord::from_raw(&RawRow::from_pairs([
            ("year", "2025"),
            ("month", "2"),
            ("VaR_total", "-80"),
            ("VaR_energy", "-44"),
            ("energyVolumn", "12"),
        ])));
        d
    }

    #[test]
    fn test_specific_year_builds_kpis_and_series() {
        let view = build(
            &datasets(),
            YearSelection::Specific(2025),
            RiskMeasure::VaR,
            ProductDimension::Energy,
        );
        let kpis = view.kpis.unwrap();
        assert_relative_eq!(kpis.risk_total, -900.0);
        assert_relative_eq!(kpis.mtm, 1200.0);
        assert_relative_eq!(kpis.pct_energy, 0.55);
        assert_eq!(view.risk_total.len(), 12);
        assert_relative_eq!(view.risk_total[1].value, -80.0);
        assert_relative_eq!(view.risk_dimension[1].value, -44.0);
        assert_eq!(view.volumes.len(), 1);
        assert_relative_eq!(view.volumes[0].points[1].value, 12.0);
    }

    #[test]
    fn test_missing_year_has_no_kpis_but_filled_series() {
        let view = build(
            &datasets(),
            YearSelection::Specific(1999),
            RiskMeasure::VaR,
            ProductDimension::Energy,
        );
        assert!(view.kpis.is_none());
        assert_eq!(view.risk_total.len(), 12);
        assert!(view.risk_total.iter().all(|p| p.value == 0.0));
    }

    #[test]
    fn test_all_years_accumulates() {
        let view = build(
            &datasets(),
            YearSelection::All,
            RiskMeasure::VaR,
            ProductDimension::Source,
        );
        assert!(view.risk_total.is_empty());
        assert_relative_eq!(view.kpis.unwrap().risk_total, -900.0);
    }

    #[test]
    fn test_empty_datasets_all_years_has_no_kpis() {
        let view = build(
            &Datasets::empty(),
            YearSelection::All,
            RiskMeasure::CVaR,
            ProductDimension::Energy,
        );
        assert!(view.kpis.is_none());
    }
}
