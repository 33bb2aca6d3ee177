//! Internal rating codes and the six-tier risk-bucket scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target total PMA across all buckets, thousands of BRL.
pub const TARGET_TOTAL_PMA: f64 = 3000.0;

/// Credit-risk tier, lowest to highest risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBucket {
    /// Baixíssimo risco (rating 1A).
    VeryLow,
    /// Baixo risco (rating 2B).
    Low,
    /// Médio risco 1 (rating 3C).
    Medium1,
    /// Médio risco 2 (rating 4D).
    Medium2,
    /// Alto risco (rating 5E).
    High,
    /// Altíssimo risco (rating 6F).
    VeryHigh,
}

impl RiskBucket {
    /// All buckets, lowest risk first.
    pub const ALL: [Self; 6] = [
        Self::VeryLow,
        Self::Low,
        Self::Medium1,
        Self::Medium2,
        Self::High,
        Self::VeryHigh,
    ];

    /// Map an internal rating code to its bucket.
    ///
    /// `ACR` and `I` counterparties carry no credit risk and map to
    /// `None`; so does any unknown code (lookup miss means excluded,
    /// not an error).
    pub fn classify(rating: &str) -> Option<Self> {
        match rating.trim() {
            "1A" => Some(Self::VeryLow),
            "2B" => Some(Self::Low),
            "3C" => Some(Self::Medium1),
            "4D" => Some(Self::Medium2),
            "5E" => Some(Self::High),
            "6F" => Some(Self::VeryHigh),
            _ => None,
        }
    }

    /// Whether a rating code marks an exempt counterparty (regulated
    /// ACR contracts and internal `I` entries).
    pub fn is_exempt(rating: &str) -> bool {
        matches!(rating.trim(), "ACR" | "I")
    }

    /// Portuguese bucket label as shown on the dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VeryLow => "Baixíssimo risco",
            Self::Low => "Baixo risco",
            Self::Medium1 => "Médio risco 1",
            Self::Medium2 => "Médio risco 2",
            Self::High => "Alto risco",
            Self::VeryHigh => "Altíssimo risco",
        }
    }

    /// Target share of total PMA allocated to this bucket, as a fraction.
    pub const fn target_share(&self) -> f64 {
        match self {
            Self::VeryLow => 0.07,
            Self::Low => 0.13,
            Self::Medium1 => 0.38,
            Self::Medium2 => 0.42,
            Self::High => 0.0,
            Self::VeryHigh => 0.0,
        }
    }

    /// Target PMA for this bucket, thousands of BRL.
    pub const fn target_pma(&self) -> f64 {
        match self {
            Self::VeryLow => 220.0,
            Self::Low => 397.0,
            Self::Medium1 => 1133.0,
            Self::Medium2 => 1250.0,
            Self::High => 0.0,
            Self::VeryHigh => 0.0,
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
