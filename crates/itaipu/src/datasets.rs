//! The loaded-dataset value object behind every dashboard lens.

use itaipu_data::records::{
    CounterpartyProductRecord, CounterpartyRecord, CreditExposureMonthRecord,
    CreditExposureRecord, NetPosition, PmixRecord, ProductRecord, RiskMonthRecord, RiskYearRecord,
};
use itaipu_data::{DataDirectory, DataError, Dataset, FromRaw, Result, normalize};

/// Every normalized sheet, loaded once and shared read-only by the lenses.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    /// Net positions per (year, month, source, submarket).
    pub net: Vec<NetPosition>,
    /// Price-mix rows.
    pub pmix: Vec<PmixRecord>,
    /// Monthly downside risk.
    pub risk_month: Vec<RiskMonthRecord>,
    /// Yearly downside risk.
    pub risk_year: Vec<RiskYearRecord>,
    /// Net positions per counterparty.
    pub counterparties: Vec<CounterpartyRecord>,
    /// Annual credit exposure per counterparty.
    pub credit: Vec<CreditExposureRecord>,
    /// Monthly credit exposure per counterparty.
    pub credit_month: Vec<CreditExposureMonthRecord>,
    /// Product-volume breakdown per counterparty.
    pub counterparty_products: Vec<CounterpartyProductRecord>,
    /// Portfolio-level product-volume breakdown.
    pub products: Vec<ProductRecord>,
}

impl Datasets {
    /// Datasets with no rows anywhere. Every lens renders an empty but
    /// well-formed view model from this.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load and normalize every sheet from the data directory, all reads
    /// issued concurrently.
    ///
    /// A sheet that is missing or fails to parse is logged and normalized
    /// to no rows, so every lens still renders an empty view. Only a
    /// missing data directory is an error.
    pub async fn load(dir: &DataDirectory) -> Result<Self> {
        if !dir.path().is_dir() {
            return Err(DataError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("data directory {} not found", dir.path().display()),
            )));
        }
        let (
            net,
            pmix,
            risk_month,
            risk_year,
            counterparties,
            credit,
            credit_month,
            counterparty_products,
            products,
        ) = futures::join!(
            fetch::<NetPosition>(dir, Dataset::Net),
            fetch::<PmixRecord>(dir, Dataset::Pmix),
            fetch::<RiskMonthRecord>(dir, Dataset::DownsideRiskMonth),
            fetch::<RiskYearRecord>(dir, Dataset::DownsideRiskYear),
            fetch::<CounterpartyRecord>(dir, Dataset::NetCounterparty),
            fetch::<CreditExposureRecord>(dir, Dataset::CreditExposure),
            fetch::<CreditExposureMonthRecord>(dir, Dataset::CreditExposureMonth),
            fetch::<CounterpartyProductRecord>(dir, Dataset::NetCounterpartyProducts),
            fetch::<ProductRecord>(dir, Dataset::NetProducts),
        );
        Ok(Self {
            net,
            pmix,
            risk_month,
            risk_year,
            counterparties,
            credit,
            credit_month,
            counterparty_products,
            products,
        })
    }
}

async fn fetch<T: FromRaw>(dir: &DataDirectory, dataset: Dataset) -> Vec<T> {
    match dir.load(dataset).await {
        Ok(rows) => normalize(&rows),
        Err(DataError::MissingDataset { name, reason }) => {
            log::warn!("dataset {name} unavailable ({reason}), rendering empty");
            Vec::new()
        }
        Err(e) => {
            log::warn!(
                "dataset {} unreadable ({e}), rendering empty",
                dataset.file_name()
            );
            Vec::new()
        }
    }
}
