//! Plain-text rendering for the CLI and the JSON report envelope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One labeled KPI value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiTile {
    /// Tile label.
    pub label: String,
    /// Pre-formatted value.
    pub value: String,
}

impl KpiTile {
    /// Create a tile from anything stringly.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A titled block of KPI tiles, rendered label-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KpiBlock {
    /// Block heading.
    pub title: String,
    /// Tiles in display order.
    pub tiles: Vec<KpiTile>,
}

impl KpiBlock {
    /// Create an empty block with a heading.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tiles: Vec::new(),
        }
    }

    /// Append a tile.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.tiles.push(KpiTile::new(label, value));
    }
}

impl fmt::Display for KpiBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "-".repeat(self.title.chars().count()))?;
        let width = self
            .tiles
            .iter()
            .map(|t| t.label.chars().count())
            .max()
            .unwrap_or(0);
        for tile in &self.tiles {
            writeln!(f, "{:<width$}  {}", tile.label, tile.value)?;
        }
        Ok(())
    }
}

/// A column-aligned text table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextTable {
    /// Column headers.
    pub headers: Vec<String>,
    /// Rows of pre-formatted cells.
    pub rows: Vec<Vec<String>>,
}

impl TextTable {
    /// Create a table with the given headers.
    pub fn new(headers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append one row; short rows are padded with empty cells.
    pub fn push_row(&mut self, cells: impl IntoIterator<Item = impl Into<String>>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }
        widths
    }
}

impl fmt::Display for TextTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let render = |f: &mut fmt::Formatter<'_>, cells: &[String]| -> fmt::Result {
            let line = cells
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())
        };
        render(f, &self.headers)?;
        writeln!(f, "{}", "-".repeat(widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1)))?;
        for row in &self.rows {
            render(f, row)?;
        }
        Ok(())
    }
}

/// JSON report envelope for `--format json` output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Which lens produced the report.
    pub lens: String,
    /// Report generation timestamp.
    pub timestamp: DateTime<Utc>,
    /// The serialized view model.
    pub contents: serde_json::Value,
}

impl Report {
    /// Wrap a serializable view model.
    pub fn new(lens: impl Into<String>, contents: &impl Serialize) -> Result<Self, ReportError> {
        Ok(Self {
            lens: lens.into(),
            timestamp: Utc::now(),
            contents: serde_json::to_value(contents)?,
        })
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kpi_block_aligns_labels() {
        let mut block = KpiBlock::new("Posição líquida");
        block.push("Volume", "1.234 MWm");
        block.push("MtM", "R$ 500");
        let rendered = block.to_string();
        assert!(rendered.contains("Posição líquida\n"));
        assert!(rendered.contains("Volume  1.234 MWm\n"));
        assert!(rendered.contains("MtM     R$ 500\n"));
    }

    #[test]
    fn test_table_pads_short_rows() {
        let mut table = TextTable::new(["Bucket", "EL", "Meta"]);
        table.push_row(["Baixo risco", "100"]);
        assert_eq!(table.rows[0].len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("Bucket       EL   Meta"));
        assert!(rendered.contains("Baixo risco  100"));
    }

    #[test]
    fn test_report_envelope_round_trips() {
        #[derive(Serialize)]
        struct View {
            total: f64,
        }
        let report = Report::new("net", &View { total: 1.5 }).unwrap();
        assert_eq!(report.lens, "net");
        let json = report.to_json().unwrap();
        assert!(json.contains("\"total\": 1.5"));
    }
}
