//! Portfolio-risk lens: EL distribution across buckets versus target.

use crate::datasets::Datasets;
use itaipu_risk::{RiskBucket, RiskDistribution, distribute};
use serde::Serialize;

/// View model of the portfolio-risk lens.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioView {
    /// Realized versus target EL distribution.
    pub distribution: RiskDistribution,
    /// Counterparties that entered the distribution.
    pub counterparties: usize,
}

/// Build the portfolio-risk lens.
pub fn build(datasets: &Datasets) -> PortfolioView {
    let counterparties = datasets
        .credit
        .iter()
        .filter(|r| r.el_pfe_year > 0.0 && RiskBucket::classify(&r.rating).is_some())
        .count();
    PortfolioView {
        distribution: distribute(&datasets.credit),
        counterparties,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use itaipu_data::raw::{FromRaw, RawRow};
    use itaipu_data::records::CreditExposureRecord;

    fn datasets() -> Datasets {
        let mut d = Datasets::empty();
        for (rating, el) in [("3C", "100"), ("3C", "300"), ("ACR", "999"), ("1A", "0")] {
            d.credit.push(CreditExposureRecord::from_raw(&RawRow::from_pairs([
                ("counterparty", "X"),
                ("rating", rating),
                ("EL_PFE_year", el),
            ])));
        }
        d
    }

    #[test]
    fn test_distribution_and_count() {
        let view = build(&datasets());
        assert_eq!(view.counterparties, 2);
        let medium1 = &view.distribution.rows[RiskBucket::Medium1 as usize];
        assert_relative_eq!(medium1.realized_share, 1.0);
        assert_relative_eq!(medium1.el_sum, 400.0);
    }

    #[test]
    fn test_empty_datasets_are_well_formed() {
        let view = build(&Datasets::empty());
        assert_eq!(view.counterparties, 0);
        assert_eq!(view.distribution.rows.len(), 6);
        assert_relative_eq!(view.distribution.total_el, 0.0);
    }
}
