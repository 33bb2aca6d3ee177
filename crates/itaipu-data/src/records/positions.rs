//! Position and product-volume records.

use crate::raw::{FromRaw, RawRow};
use serde::{Deserialize, Serialize};

/// One net position row per (year, month, energy source, submarket).
///
/// Multiple rows may share the same key; aggregation sums them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetPosition {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Contract maturation label.
    pub maturation: String,
    /// Energy source description (e.g. `Convencional`).
    pub energy_source: String,
    /// Submarket code (N, NE, SE, S).
    pub submarket: String,
    /// Net contracted volume, MWm.
    pub net_volume: f64,
    /// Mark-to-market value.
    pub mtm: f64,
    /// Profit and loss.
    pub profit_loss: f64,
    /// Average buy price of the mix.
    pub buy_pmix: f64,
    /// Average sell price of the mix.
    pub sell_pmix: f64,
    /// Notional exposure.
    pub face_value: f64,
}

impl FromRaw for NetPosition {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            year: row.int("year") as i32,
            month: row.int("month") as u32,
            maturation: row.text("maturation"),
            energy_source: row.text("energySourceDescription"),
            submarket: row.text("submarketDescription"),
            net_volume: row.num("netVolume"),
            mtm: row.num("MtM"),
            profit_loss: row.num("profitLoss"),
            buy_pmix: row.num("buyPmix"),
            sell_pmix: row.num("sellPmix"),
            face_value: row.num("faceValue"),
        }
    }
}

/// Price-mix row: average buy/sell prices with the volume behind them.
///
/// The volume column is spelled `netVolumn` in the legacy sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PmixRecord {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Energy source description.
    pub energy_source: String,
    /// Submarket code.
    pub submarket: String,
    /// Average buy price.
    pub buy_pmix: f64,
    /// Average sell price.
    pub sell_pmix: f64,
    /// Net volume behind the averages, MWm.
    pub net_volume: f64,
}

impl FromRaw for PmixRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            year: row.int("year") as i32,
            month: row.int("month") as u32,
            energy_source: row.text("energySourceDescription"),
            submarket: row.text("submarketDescription"),
            buy_pmix: row.num("buyPmix"),
            sell_pmix: row.num("sellPmix"),
            net_volume: row.num("netVolumn"),
        }
    }
}

/// Net position per counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyRecord {
    /// Counterparty identifier.
    pub counterparty: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Submarket code.
    pub submarket: String,
    /// Net contracted volume, MWm.
    pub net_volume: f64,
    /// Notional exposure.
    pub face_value: f64,
    /// Mark-to-market value.
    pub mtm: f64,
    /// Profit and loss.
    pub profit_loss: f64,
}

impl FromRaw for CounterpartyRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            counterparty: row.text("counterparty"),
            year: row.int("year") as i32,
            month: row.int("month") as u32,
            submarket: row.text("submarketDescription"),
            net_volume: row.num("netVolume"),
            face_value: row.num("faceValue"),
            mtm: row.num("MtM"),
            profit_loss: row.num("profitLoss"),
        }
    }
}

/// Portfolio product-volume breakdown per (year, month, maturation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Contract maturation label.
    pub maturation: String,
    /// Hours in the delivery period.
    pub n_hours: f64,
    /// Total energy volume, MWm.
    pub energy_volume: f64,
    /// Incentivized-source volume, MWm.
    pub source_volume: f64,
    /// Conventional volume, MWm.
    pub con_volume: f64,
    /// North submarket volume.
    pub volume_n: f64,
    /// Northeast submarket volume.
    pub volume_ne: f64,
    /// Southeast/Center-West submarket volume.
    pub volume_se: f64,
    /// South submarket volume.
    pub volume_s: f64,
    /// Notional exposure.
    pub face_value: f64,
    /// Mark-to-market value.
    pub mtm: f64,
    /// Profit and loss.
    pub profit_loss: f64,
}

impl FromRaw for ProductRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            year: row.int("year") as i32,
            month: row.int("month") as u32,
            maturation: row.text("maturation"),
            n_hours: row.num("n_hours"),
            energy_volume: row.num("energyVolumn"),
            source_volume: row.num("sourceVolumn"),
            con_volume: row.num("conVolumn"),
            volume_n: row.num("nSubmarketVolumn"),
            volume_ne: row.num("neSubmarketVolumn"),
            volume_se: row.num("seSubmarketVolumn"),
            volume_s: row.num("sSubmarketVolumn"),
            face_value: row.num("faceValue"),
            mtm: row.num("mtm"),
            profit_loss: row.num("profitLoss"),
        }
    }
}

/// Product-volume breakdown per counterparty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterpartyProductRecord {
    /// Counterparty identifier.
    pub counterparty: String,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// Total energy volume, MWm.
    pub energy_volume: f64,
    /// Conventional volume, MWm.
    pub con_volume: f64,
    /// Incentivized-source volume, MWm.
    pub source_volume: f64,
    /// Southeast/Center-West submarket volume.
    pub volume_se: f64,
    /// South submarket volume.
    pub volume_s: f64,
    /// Northeast submarket volume.
    pub volume_ne: f64,
    /// North submarket volume.
    pub volume_n: f64,
    /// Notional exposure.
    pub face_value: f64,
    /// Mark-to-market value.
    pub mtm: f64,
    /// Profit and loss.
    pub profit_loss: f64,
}

impl FromRaw for CounterpartyProductRecord {
    fn from_raw(row: &RawRow) -> Self {
        Self {
            counterparty: row.text("counterparty"),
            year: row.int("year") as i32,
            month: row.int("month") as u32,
            energy_volume: row.num("energyVolumn"),
            con_volume: row.num("conVolumn"),
            source_volume: row.num("sourceVolumn"),
            volume_se: row.num("seSubmarketVolumn"),
            volume_s: row.num("sSubmarketVolumn"),
            volume_ne: row.num("neSubmarketVolumn"),
            volume_n: row.num("nSubmarketVolumn"),
            face_value: row.num("faceValue"),
            mtm: row.num("mtm"),
            profit_loss: row.num("profitLoss"),
        }
    }
}
