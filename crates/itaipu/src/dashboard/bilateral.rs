//! Bilateral-risk lens: screened counterparty cards plus a focused
//! counterparty's exposure detail.

use super::counterparty::product_volume_series;
use super::credit::CreditExposureKpis;
use super::{LabeledSeries, filled_series};
use crate::datasets::Datasets;
use itaipu_data::records::{CounterpartyProductRecord, CreditExposureMonthRecord};
use itaipu_risk::CounterpartyScreen;
use itaipu_series::{MonthlyPoint, YearSelection};
use serde::Serialize;

/// One screened counterparty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterpartyCard {
    /// Counterparty identifier.
    pub counterparty: String,
    /// Internal rating code.
    pub rating: String,
    /// Annual P&L.
    pub profit_loss_year: f64,
    /// P&L ceiling.
    pub profit_loss_limit: f64,
    /// Expected loss on the PFE measure.
    pub el_pfe_year: f64,
}

/// Detail block for the focused counterparty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BilateralFocus {
    /// The counterparty in focus.
    pub counterparty: String,
    /// Annual exposure KPIs.
    pub exposure: CreditExposureKpis,
    /// Product-volume breakdown, month grain.
    pub volumes: Vec<LabeledSeries>,
    /// Monthly potential future exposure.
    pub pfe: Vec<MonthlyPoint>,
    /// Monthly P&L.
    pub profit_loss: Vec<MonthlyPoint>,
}

/// View model of the bilateral lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BilateralView {
    /// Which screen produced the cards.
    pub screen: CounterpartyScreen,
    /// Screened counterparties, highest annual P&L first.
    pub cards: Vec<CounterpartyCard>,
    /// Focused counterparty detail; `None` when the screen is empty and
    /// no explicit focus was given.
    pub focus: Option<BilateralFocus>,
}

/// Build the bilateral lens.
///
/// The focus defaults to the first screened counterparty when not given
/// explicitly.
pub fn build(
    datasets: &Datasets,
    screen: CounterpartyScreen,
    focus: Option<&str>,
    year: YearSelection,
) -> BilateralView {
    let hits = screen.apply(&datasets.credit);
    let cards: Vec<CounterpartyCard> = hits
        .iter()
        .map(|r| CounterpartyCard {
            counterparty: r.counterparty.clone(),
            rating: r.rating.clone(),
            profit_loss_year: r.profit_loss_year,
            profit_loss_limit: r.profit_loss_limit,
            el_pfe_year: r.el_pfe_year,
        })
        .collect();

    let focus_name = focus
        .map(str::to_string)
        .or_else(|| cards.first().map(|c| c.counterparty.clone()));
    let focus = focus_name.and_then(|name| build_focus(datasets, &name, year));

    BilateralView {
        screen,
        cards,
        focus,
    }
}

fn build_focus(datasets: &Datasets, name: &str, year: YearSelection) -> Option<BilateralFocus> {
    let exposure = datasets
        .credit
        .iter()
        .find(|r| r.counterparty == name)
        .map(CreditExposureKpis::from_record)?;

    let (volumes, pfe, profit_loss) = match year {
        YearSelection::Specific(year) => {
            let product_rows: Vec<&CounterpartyProductRecord> = datasets
                .counterparty_products
                .iter()
                .filter(|r| r.counterparty == name && r.year == year)
                .collect();
            let credit_rows: Vec<&CreditExposureMonthRecord> = datasets
                .credit_month
                .iter()
                .filter(|r| r.counterparty == name && r.year == year)
                .collect();
            (
                product_volume_series(&product_rows, year),
                filled_series(&credit_rows, year, |r| r.month, |r| r.pfe),
                filled_series(&credit_rows, year, |r| r.month, |r| r.profit_loss),
            )
        }
        YearSelection::All => Default::default(),
    };

    Some(BilateralFocus {
        counterparty: name.to_string(),
        exposure,
        volumes,
        pfe,
        profit_loss,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use itaipu_data::raw::{FromRaw, RawRow};
    use itaipu_data::records::CreditExposureRecord;

    fn datasets() -> Datasets {
        let mut d = Datasets::empty();
        for (name, rating, pl, limit) in [
            ("Comercializadora A", "3C", "600", "500"),
            ("Geradora B", "1A", "900", "1000"),
            ("Isenta", "ACR", "9999", "0"),
        ] {
            d.credit.push(CreditExposureRecord::from_raw(&RawRow::from_pairs([
                ("counterparty", name),
                ("rating", rating),
                ("profitLoss_year", pl),
                ("profitLossLimit", limit),
            ])));
        }
        d.credit_month
            .push(CreditExposureMonthRecord::from_raw(&RawRow::from_pairs([
                ("counterparty", "Geradora B"),
                ("year", "2025"),
                ("month", "6"),
                ("PFE", "42"),
            ])));
        d
    }

    #[test]
    fn test_focus_defaults_to_first_screened() {
        let view = build(
            &datasets(),
            CounterpartyScreen::TopProfitLoss,
            None,
            YearSelection::Specific(2025),
        );
        // Exempt rows never screen; Geradora B has the highest P&L.
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[0].counterparty, "Geradora B");
        let focus = view.focus.unwrap();
        assert_eq!(focus.counterparty, "Geradora B");
        assert_relative_eq!(focus.pfe[5].value, 42.0);
        assert_eq!(focus.volumes.len(), 7);
    }

    #[test]
    fn test_above_pl_limit_screen() {
        let view = build(
            &datasets(),
            CounterpartyScreen::AbovePlLimit,
            None,
            YearSelection::All,
        );
        assert_eq!(view.cards.len(), 1);
        assert_eq!(view.cards[0].counterparty, "Comercializadora A");
        let focus = view.focus.unwrap();
        assert!(focus.pfe.is_empty());
    }

    #[test]
    fn test_explicit_focus_overrides_screen() {
        let view = build(
            &datasets(),
            CounterpartyScreen::AbovePlLimit,
            Some("Geradora B"),
            YearSelection::All,
        );
        assert_eq!(view.focus.unwrap().counterparty, "Geradora B");
    }

    #[test]
    fn test_empty_datasets_have_no_focus() {
        let view = build(
            &Datasets::empty(),
            CounterpartyScreen::TopProfitLoss,
            None,
            YearSelection::All,
        );
        assert!(view.cards.is_empty());
        assert!(view.focus.is_none());
    }
}
