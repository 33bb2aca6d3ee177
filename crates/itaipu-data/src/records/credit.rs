//! Counterparty credit-exposure records.

use crate::raw::{FromRaw, RawRow};
use serde::{Deserialize, Serialize};

/// Annual credit exposure for one counterparty.
///
/// Exposure measures (EPE, PFE, CVaR) and the expected losses derived from
/// them arrive pre-computed. `profit_loss_limit` is the ceiling used for
/// limit-breach screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditExposureRecord {
    /// Counterparty identifier.
    pub counterparty: String,
    /// Internal rating code (1A..6F, or exempt ACR/I).
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
    /// P&L ceiling for this counterparty.
    pub profit_loss_limit: f64,
}

impl FromRaw for CreditExposureRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            counterparty: row.text("counterparty"),
            rating: row.text("rating"),
            epe: row.num("EPE"),
            pfe_year: row.num("PFE_year"),
            cvar_year: row.num("CVaR_year"),
            el_epe: row.num("EL_EPE"),
            el_pfe_year: row.num("EL_PFE_year"),
            el_cvar_year: row.num("EL_CVaR_year"),
            profit_loss_year: row.num("profitLoss_year"),
            profit_loss_limit: row.num("profitLossLimit"),
        }
    }
}

/// Monthly credit exposure for one counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditExposureMonthRecord {
    /// Counterparty identifier.
    pub counterparty: String,
    /// Short counterparty code.
    pub counterparty_code: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Contract maturation label.
    pub maturation: String,
    /// P&L for the month.
    pub profit_loss: f64,
    /// Expected exposure.
    pub ee: f64,
    /// Potential future exposure.
    pub pfe: f64,
    /// Credit CVaR.
    pub cvar: f64,
    /// Probability of default.
    pub pd: f64,
    /// Loss given default.
    pub lgd: f64,
    /// Expected loss on the EE measure.
    pub el_ee: f64,
    /// Expected loss on the PFE measure.
    pub el_pfe: f64,
    /// Expected loss on the CVaR measure.
    pub el_cvar: f64,
    /// P&L ceiling for this counterparty.
    pub profit_loss_limit: f64,
    /// Internal rating code.
    pub rating: String,
}

impl FromRaw for CreditExposureMonthRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            counterparty: row.text("counterparty"),
            counterparty_code: row.text("counterpartyCode"),
            year: row.int("year") as i32,
            month: row.int("month") as u32,
            maturation: row.text("maturation"),
            profit_loss: row.num("profitLoss"),
            ee: row.num("EE"),
            pfe: row.num("PFE"),
            cvar: row.num("CVaR"),
            pd: row.num("PD"),
            lgd: row.num("LGD"),
            el_ee: row.num("EL_EE"),
            el_pfe: row.num("EL_PFE"),
            el_cvar: row.num("EL_CVaR"),
            profit_loss_limit: row.num("profitLossLimit"),
            rating: row.text("rating"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_annual_exposure_decodes() {
        let row = RawRow::from_pairs([
            ("counterparty", "Geradora B"),
            ("rating", "3C"),
            ("EPE", "1000"),
            ("PFE_year", "2500"),
            ("EL_PFE_year", "120.5"),
            ("profitLoss_year", "-80"),
            ("profitLossLimit", "500"),
        ]);
        let rec = CreditExposureRecord::from_raw(&row);
        assert_eq!(rec.rating, "3C");
        assert_relative_eq!(rec.pfe_year, 2500.0);
        assert_relative_eq!(rec.el_pfe_year, 120.5);
        assert_relative_eq!(rec.el_cvar_year, 0.0);
    }

    #[test]
    fn test_monthly_exposure_decodes() {
        let row = RawRow::from_pairs([
            ("counterparty", "Geradora B"),
            ("counterpartyCode", "GB"),
            ("year", "2025"),
            ("month", "11"),
            ("PFE", "210"),
            ("PD", "0.02"),
            ("LGD", "0.6"),
        ]);
        let rec = CreditExposureMonthRecord::from_raw(&row);
        assert_eq!(rec.counterparty_code, "GB");
        assert_eq!(rec.month, 11);
        assert_relative_eq!(rec.pfe, 210.0);
        assert_relative_eq!(rec.pd, 0.02);
    }
}
