//! Counterparty screens for the bilateral credit lens.

use crate::bucket::RiskBucket;
use itaipu_data::records::CreditExposureRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which counterparties the bilateral lens surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CounterpartyScreen {
    /// All counterparties, highest annual P&L first.
    TopProfitLoss,
    /// Counterparties whose annual P&L exceeds their limit.
    AbovePlLimit,
    /// Counterparties whose EL(PFE) exceeds their limit.
    AboveElLimit,
}

impl CounterpartyScreen {
    /// All screens, in display order.
    pub const ALL: [Self; 3] = [Self::TopProfitLoss, Self::AbovePlLimit, Self::AboveElLimit];

    /// CLI-facing name of the screen.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TopProfitLoss => "top-pl",
            Self::AbovePlLimit => "above-pl-limit",
            Self::AboveElLimit => "above-el-limit",
        }
    }

    /// Parse a screen from its CLI name.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "top-pl" => Some(Self::TopProfitLoss),
            "above-pl-limit" => Some(Self::AbovePlLimit),
            "above-el-limit" => Some(Self::AboveElLimit),
            _ => None,
        }
    }

    /// Run the screen over the annual exposures.
    ///
    /// Exempt counterparties (ACR and internal entries) never enter the
    /// screening universe. The result is sorted by descending annual
    /// P&L for every screen.
    pub fn apply<'a>(&self, records: &'a [CreditExposureRecord]) -> Vec<&'a CreditExposureRecord> {
        let mut hits: Vec<&CreditExposureRecord> = records
            .iter()
            .filter(|r| !RiskBucket::is_exempt(&r.rating))
            .filter(|r| match self {
                Self::TopProfitLoss => true,
                Self::AbovePlLimit => r.profit_loss_year > r.profit_loss_limit,
                Self::AboveElLimit => r.el_pfe_year > r.profit_loss_limit,
            })
            .collect();
        hits.sort_by(|a, b| b.profit_loss_year.total_cmp(&a.profit_loss_year));
        hits
    }
}

impl fmt::Display for CounterpartyScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
