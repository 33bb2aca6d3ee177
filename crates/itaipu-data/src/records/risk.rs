//! Downside-risk records (VaR/CVaR totals and decompositions).
//!
//! Risk measures arrive pre-computed from the risk engine; this crate only
//! reshapes them. Percentage contributions are taken as given on both
//! sheets; the accumulated "all years" mode recomputes them from absolute
//! values as a cross-check (see `itaipu-risk`).

use crate::raw::{FromRaw, RawRow};
use serde::{Deserialize, Serialize};

/// Monthly downside risk for the whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskMonthRecord {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Energy volume supporting the risk, MWm.
    pub energy_volume: f64,
    /// Incentivized-source volume, MWm.
    pub source_volume: f64,
    /// Conventional volume, MWm.
    pub con_volume: f64,
    /// Total VaR (95%).
    pub var_total: f64,
    /// Total CVaR (95%).
    pub cvar_total: f64,
    /// VaR attributed to the energy dimension.
    pub var_energy: f64,
    /// CVaR attributed to the energy dimension.
    pub cvar_energy: f64,
    /// VaR attributed to the source dimension.
    pub var_source: f64,
    /// CVaR attributed to the source dimension.
    pub cvar_source: f64,
    /// VaR attributed to the submarket dimension.
    pub var_submarket: f64,
    /// CVaR attributed to the submarket dimension.
    pub cvar_submarket: f64,
    /// Stressed P&L under the VaR scenario.
    pub stressed_pl_var: f64,
    /// Stressed P&L under the CVaR scenario.
    pub stressed_pl_cvar: f64,
    /// Unstressed P&L for the month.
    pub profit_loss: f64,
    /// Energy share of VaR, as given by the risk engine.
    pub pct_var_energy: f64,
    /// Submarket share of VaR.
    pub pct_var_submarket: f64,
    /// Source share of VaR.
    pub pct_var_source: f64,
    /// Energy share of CVaR.
    pub pct_cvar_energy: f64,
    /// Submarket share of CVaR.
    pub pct_cvar_submarket: f64,
    /// Source share of CVaR.
    pub pct_cvar_source: f64,
    /// Notional exposure.
    pub face_value: f64,
    /// Southeast/Center-West submarket volume.
    pub volume_se: f64,
    /// South submarket volume.
    pub volume_s: f64,
    /// North submarket volume.
    pub volume_n: f64,
    /// Northeast submarket volume.
    pub volume_ne: f64,
}

impl FromRaw for RiskMonthRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            year: row.int("year") as i32,
            month: row.int("month") as u32,
            energy_volume: row.num("energyVolumn"),
            source_volume: row.num("sourceVolumn"),
            con_volume: row.num("conVolumn"),
            var_total: row.num("VaR_total"),
            cvar_total: row.num("CVaR_total"),
            var_energy: row.num("VaR_energy"),
            cvar_energy: row.num("CVaR_energy"),
            var_source: row.num("VaR_source"),
            cvar_source: row.num("CVaR_source"),
            var_submarket: row.num("VaR_submarket"),
            cvar_submarket: row.num("CVaR_submarket"),
            stressed_pl_var: row.num("profitLossTotal_VaR"),
            stressed_pl_cvar: row.num("profitLossTotal_CVaR"),
            profit_loss: row.num("profitLoss"),
            pct_var_energy: row.num("percentageVaRenergy"),
            pct_var_submarket: row.num("percentageVaRsubmarket"),
            pct_var_source: row.num("percentageVaRsource"),
            pct_cvar_energy: row.num("percentageCVaRenergy"),
            pct_cvar_submarket: row.num("percentageCVaRsubmarket"),
            pct_cvar_source: row.num("percentageCVaRsource"),
            face_value: row.num("faceValue"),
            volume_se: row.num("seSubmarketVolumn"),
            volume_s: row.num("sSubmarketVolumn"),
            volume_n: row.num("nSubmarketVolumn"),
            volume_ne: row.num("neSubmarketVolumn"),
        }
    }
}

/// Yearly downside risk.
///
/// The yearly sheet is the oldest export and its headers carry stray
/// spaces (` VaR_total `); [`RawRow`] lookup tolerates both variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskYearRecord {
    /// Calendar year.
    pub year: i32,
    /// Total VaR (95%).
    pub var_total: f64,
    /// Total CVaR (95%).
    pub cvar_total: f64,
    /// VaR attributed to the energy dimension.
    pub var_energy: f64,
    /// CVaR attributed to the energy dimension.
    pub cvar_energy: f64,
    /// VaR attributed to the source dimension.
    pub var_source: f64,
    /// CVaR attributed to the source dimension.
    pub cvar_source: f64,
    /// VaR attributed to the submarket dimension.
    pub var_submarket: f64,
    /// CVaR attributed to the submarket dimension.
    pub cvar_submarket: f64,
    /// Stressed P&L under the VaR scenario.
    pub stressed_pl_var: f64,
    /// Stressed P&L under the CVaR scenario.
    pub stressed_pl_cvar: f64,
    /// Energy share of VaR.
    pub pct_var_energy: f64,
    /// Submarket share of VaR.
    pub pct_var_submarket: f64,
    /// Source share of VaR.
    pub pct_var_source: f64,
    /// Energy share of CVaR.
    pub pct_cvar_energy: f64,
    /// Submarket share of CVaR.
    pub pct_cvar_submarket: f64,
    /// Source share of CVaR.
    pub pct_cvar_source: f64,
    /// Mark-to-market total.
    pub mtm: f64,
    /// Notional exposure.
    pub face_value: f64,
}

impl FromRaw for RiskYearRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            year: row.int("year") as i32,
            var_total: row.num("VaR_total"),
            cvar_total: row.num("CVaR_total"),
            var_energy: row.num("VaR_energy"),
            cvar_energy: row.num("CVaR_energy"),
            var_source: row.num("VaR_source"),
            cvar_source: row.num("CVaR_source"),
            var_submarket: row.num("VaR_submarket"),
            cvar_submarket: row.num("CVaR_submarket"),
            stressed_pl_var: row.num("profitLossTotal_VaR"),
            stressed_pl_cvar: row.num("profitLossTotal_CVaR"),
            pct_var_energy: row.num("percentageVaRenergy"),
            pct_var_submarket: row.num("percentageVaRsubmarket"),
            pct_var_source: row.num("percentageVaRsource"),
            pct_cvar_energy: row.num("percentageCVaRenergy"),
            pct_cvar_submarket: row.num("percentageCVaRsubmarket"),
            pct_cvar_source: row.num("percentageCVaRsource"),
            mtm: row.num("mtm"),
            face_value: row.num("faceValue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_month_record_decodes_decomposition() {
        let row = RawRow::from_pairs([
            ("year", "2025"),
            ("month", "7"),
            ("VaR_total", "-500"),
            ("CVaR_total", "-750"),
            ("VaR_energy", "-300"),
            ("percentageVaRenergy", "0.6"),
        ]);
        let rec = RiskMonthRecord::from_raw(&row);
        assert_eq!(rec.month, 7);
        assert_relative_eq!(rec.var_total, -500.0);
        assert_relative_eq!(rec.cvar_total, -750.0);
        assert_relative_eq!(rec.var_energy, -300.0);
        assert_relative_eq!(rec.pct_var_energy, 0.6);
        assert_relative_eq!(rec.volume_se, 0.0);
    }

    #[test]
    fn test_year_record_reads_spaced_legacy_headers() {
        let row = RawRow::from_pairs([
            ("year", "2025"),
            (" VaR_total ", "-900"),
            (" mtm ", "1200"),
            (" faceValue ", "80000"),
            (" profitLossTotal_VaR ", "-450"),
        ]);
        let rec = RiskYearRecord::from_raw(&row);
        assert_relative_eq!(rec.var_total, -900.0);
        assert_relative_eq!(rec.mtm, 1200.0);
        assert_relative_eq!(rec.face_value, 80000.0);
        assert_relative_eq!(rec.stressed_pl_var, -450.0);
    }
}
