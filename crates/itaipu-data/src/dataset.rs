//! Catalog of the dataset sheets exported by the reporting pipeline.

use serde::{Deserialize, Serialize};

/// A named dataset sheet in the data directory.
///
/// File stems are owned by the export pipeline and kept verbatim, including
/// the awkward `_-_` separators on the risk and credit monthly sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dataset {
    /// Net physical/financial positions per (year, month, source, submarket).
    Net,
    /// Price-mix rows: average buy/sell prices and net volume.
    Pmix,
    /// Monthly downside risk (VaR/CVaR totals and decompositions).
    DownsideRiskMonth,
    /// Yearly downside risk; legacy sheet with spaced column headers.
    DownsideRiskYear,
    /// Net positions per counterparty.
    NetCounterparty,
    /// Annual credit exposure per counterparty (EL/PFE/limits/rating).
    CreditExposure,
    /// Monthly credit exposure per counterparty.
    CreditExposureMonth,
    /// Product-volume breakdown per counterparty.
    NetCounterpartyProducts,
    /// Portfolio-level product-volume breakdown.
    NetProducts,
}

impl Dataset {
    /// All datasets, in load order.
    pub const ALL: [Self; 9] = [
        Self::Net,
        Self::Pmix,
        Self::DownsideRiskMonth,
        Self::DownsideRiskYear,
        Self::NetCounterparty,
        Self::CreditExposure,
        Self::CreditExposureMonth,
        Self::NetCounterpartyProducts,
        Self::NetProducts,
    ];

    /// File name of the sheet inside the data directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Net => "net.csv",
            Self::Pmix => "pmix.csv",
            Self::DownsideRiskMonth => "downside_risk_-_month.csv",
            Self::DownsideRiskYear => "downside_risk_-_year.csv",
            Self::NetCounterparty => "net_counterparty.csv",
            Self::CreditExposure => "credit_exposure.csv",
            Self::CreditExposureMonth => "credit_exposure_-_month.csv",
            Self::NetCounterpartyProducts => "net_counterparty_products.csv",
            Self::NetProducts => "net_products.csv",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<&str> = Dataset::ALL.iter().map(|d| d.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Dataset::ALL.len());
    }

    #[test]
    fn test_legacy_stems_kept() {
        assert_eq!(
            Dataset::CreditExposureMonth.file_name(),
            "credit_exposure_-_month.csv"
        );
        assert_eq!(
            Dataset::DownsideRiskYear.file_name(),
            "downside_risk_-_year.csv"
        );
    }
}
