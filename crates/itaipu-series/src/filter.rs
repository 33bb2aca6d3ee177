//! Typed filter selections for the dashboard lenses.
//!
//! The legacy sheets carried filter state as sentinel strings (`"Todos"`,
//! `"__all__"`) and loose submarket codes. These types replace them with
//! tagged selections that parse the legacy spellings at the boundary.

use itaipu_data::records::{NetPosition, PmixRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Year filter: either every year in the data or one specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YearSelection {
    /// No year restriction.
    All,
    /// A single calendar year.
    Specific(i32),
}

impl YearSelection {
    /// Parse a selection from user or legacy input.
    ///
    /// `"Todos"` and `"__all__"` (any case, surrounding whitespace
    /// ignored) mean [`YearSelection::All`]; anything else must parse
    /// as an integer year.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("todos") || trimmed.eq_ignore_ascii_case("__all__") {
            return Some(Self::All);
        }
        trimmed.parse::<i32>().ok().map(Self::Specific)
    }

    /// The selected year, `None` for [`YearSelection::All`].
    pub const fn specific(&self) -> Option<i32> {
        match self {
            Self::All => None,
            Self::Specific(year) => Some(*year),
        }
    }

    /// Whether the given year passes this selection.
    pub fn matches(&self, year: i32) -> bool {
        match self {
            Self::All => true,
            Self::Specific(selected) => year == *selected,
        }
    }
}

impl fmt::Display for YearSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "Todos"),
            Self::Specific(year) => write!(f, "{year}"),
        }
    }
}

/// Which tail-risk measure a chart or KPI reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskMeasure {
    /// Value at Risk.
    VaR,
    /// Conditional Value at Risk (expected shortfall).
    CVaR,
}

impl RiskMeasure {
    /// Both measures, in display order.
    pub const ALL: [Self; 2] = [Self::VaR, Self::CVaR];

    /// Short label used in chart legends and column headers.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VaR => "VaR",
            Self::CVaR => "CVaR",
        }
    }

    /// Parse from a label, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "var" => Some(Self::VaR),
            "cvar" => Some(Self::CVaR),
            _ => None,
        }
    }
}

impl fmt::Display for RiskMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Dimension along which portfolio risk is decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductDimension {
    /// Total energy product.
    Energy,
    /// Incentivized-source product.
    Source,
    /// Submarket decomposition.
    Submarket,
}

impl ProductDimension {
    /// All dimensions, in display order.
    pub const ALL: [Self; 3] = [Self::Energy, Self::Source, Self::Submarket];

    /// Portuguese label as shown on the dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Energy => "Energia",
            Self::Source => "Fonte",
            Self::Submarket => "Submercado",
        }
    }
}

impl fmt::Display for ProductDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Brazilian electricity submarkets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Submarket {
    /// Norte.
    North,
    /// Nordeste.
    Northeast,
    /// Sudeste/Centro-Oeste.
    Southeast,
    /// Sul.
    South,
}

impl Submarket {
    /// All submarkets, in the order the sheets list them.
    pub const ALL: [Self; 4] = [
        Self::North,
        Self::Northeast,
        Self::Southeast,
        Self::South,
    ];

    /// Submarket code as it appears in the sheets.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::Northeast => "NE",
            Self::Southeast => "SE",
            Self::South => "S",
        }
    }

    /// Full Portuguese name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::North => "Norte",
            Self::Northeast => "Nordeste",
            Self::Southeast => "Sudeste/Centro-Oeste",
            Self::South => "Sul",
        }
    }

    /// Parse from a sheet code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "N" => Some(Self::North),
            "NE" => Some(Self::Northeast),
            "SE" => Some(Self::Southeast),
            "S" => Some(Self::South),
            _ => None,
        }
    }
}

impl fmt::Display for Submarket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Combined filter over position rows.
///
/// `None` in a field means "no restriction", matching the legacy
/// all-options dropdowns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionFilter {
    /// Restrict to one energy source description.
    pub energy_source: Option<String>,
    /// Restrict to one submarket.
    pub submarket: Option<Submarket>,
    /// Restrict to one calendar year.
    pub year: Option<i32>,
}

impl PositionFilter {
    /// Filter with no restrictions.
    pub fn all() -> Self {
        Self::default()
    }

    fn matches_parts(&self, year: i32, energy_source: &str, submarket: &str) -> bool {
        if let Some(selected) = self.year
            && selected != year
        {
            return false;
        }
        if let Some(source) = &self.energy_source
            && source != energy_source
        {
            return false;
        }
        if let Some(selected) = self.submarket
            && Submarket::from_code(submarket) != Some(selected)
        {
            return false;
        }
        true
    }

    /// Whether a net position row passes the filter.
    pub fn matches_position(&self, position: &NetPosition) -> bool {
        self.matches_parts(position.year, &position.energy_source, &position.submarket)
    }

    /// Whether a price-mix row passes the filter.
    pub fn matches_pmix(&self, pmix: &PmixRecord) -> bool {
        self.matches_parts(pmix.year, &pmix.energy_source, &pmix.submarket)
    }

    /// Narrow a slice of net positions to the rows passing the filter.
    pub fn apply_positions<'a>(&self, positions: &'a [NetPosition]) -> Vec<&'a NetPosition> {
        positions
            .iter()
            .filter(|p| self.matches_position(p))
            .collect()
    }
}
