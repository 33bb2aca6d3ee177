//! Loosely-typed rows and best-effort coercion into typed records.
//!
//! Every sheet arrives as key-value rows keyed by column header. Headers are
//! case-sensitive, but some legacy sheets ship columns with stray leading or
//! trailing spaces (` faceValue `), so lookups fall back to a trimmed-header
//! match. Coercion never fails: a numeric cell that is absent or garbage
//! becomes `0.0`, a string cell becomes `""`. Downstream summation therefore
//! never needs null checks.

use std::collections::HashMap;

/// One loosely-typed row from a dataset sheet.
///
/// Keys are the sheet's column headers; values are the raw cell contents.
/// Unknown columns are carried but ignored by the typed decoders.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row from header/cell pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a cell value, replacing any existing value for the header.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Number of cells in the row.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolve a header to its cell, tolerating legacy spaced variants.
    ///
    /// Exact match wins; otherwise the first header whose trimmed form equals
    /// the trimmed form of `key` is used.
    fn resolve(&self, key: &str) -> Option<&str> {
        if let Some(value) = self.fields.get(key) {
            return Some(value.as_str());
        }
        let wanted = key.trim();
        self.fields
            .iter()
            .find(|(header, _)| header.trim() == wanted)
            .map(|(_, value)| value.as_str())
    }

    /// Read a string field; `""` when the column is absent.
    pub fn text(&self, key: &str) -> String {
        self.resolve(key).map(str::trim).unwrap_or_default().to_string()
    }

    /// Read a numeric field; `0.0` when absent or unparseable, never NaN.
    pub fn num(&self, key: &str) -> f64 {
        self.resolve(key).map_or(0.0, coerce_f64)
    }

    /// Read an integer field; `0` when absent or unparseable.
    ///
    /// Float-ish cells (`"2025.0"`) are accepted and truncated.
    pub fn int(&self, key: &str) -> i64 {
        let value = self.num(key);
        if value.is_finite() { value as i64 } else { 0 }
    }
}

/// Best-effort float coercion.
///
/// Tries a full parse first, then the longest leading numeric prefix
/// (`"12.5 MWm"` reads as `12.5`). Anything else, including literal
/// `NaN`/`inf` cells, coerces to `0.0`.
fn coerce_f64(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        return 0.0;
    }
    let parsed = cell.parse::<f64>().ok().or_else(|| {
        let prefix_len = numeric_prefix_len(cell);
        if prefix_len == 0 {
            None
        } else {
            cell[..prefix_len].parse::<f64>().ok()
        }
    });
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Length of the longest prefix that looks like a plain decimal number.
fn numeric_prefix_len(cell: &str) -> usize {
    let bytes = cell.as_bytes();
    let mut len = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'+' | b'-' if i == 0 => len = i + 1,
            b'0'..=b'9' => {
                seen_digit = true;
                len = i + 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                len = i + 1;
            }
            _ => break,
        }
    }
    if seen_digit { len } else { 0 }
}

/// Decode one typed record from a raw row.
///
/// Implementations are total: missing or malformed cells fall back to the
/// field defaults, so decoding never rejects a row.
pub trait FromRaw: Sized {
    /// Decode a single row.
    fn from_raw(row: &RawRow) -> Self;
}

/// Decode a batch of rows, preserving input order.
pub fn normalize<T: FromRaw>(rows: &[RawRow]) -> Vec<T> {
    rows.iter().map(T::from_raw).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_text_defaults_to_empty() {
        let row = RawRow::new();
        assert_eq!(row.text("counterparty"), "");
    }

    #[test]
    fn test_num_garbage_is_zero_not_nan() {
        let row = RawRow::from_pairs([("netVolume", "n/a")]);
        let value = row.num("netVolume");
        assert!(!value.is_nan());
        assert_relative_eq!(value, 0.0);
    }

    #[test]
    fn test_num_literal_nan_is_zero() {
        let row = RawRow::from_pairs([("MtM", "NaN")]);
        assert_relative_eq!(row.num("MtM"), 0.0);
    }

    #[test]
    fn test_num_parses_prefix_like_parse_float() {
        let row = RawRow::from_pairs([("netVolume", "12.5 MWm")]);
        assert_relative_eq!(row.num("netVolume"), 12.5);
    }

    #[test]
    fn test_spaced_legacy_header_resolves() {
        let row = RawRow::from_pairs([(" faceValue ", "1500")]);
        assert_relative_eq!(row.num("faceValue"), 1500.0);
    }

    #[test]
    fn test_unspaced_lookup_of_spaced_request() {
        let row = RawRow::from_pairs([("VaR_total", "-320.5")]);
        assert_relative_eq!(row.num(" VaR_total "), -320.5);
    }

    #[test]
    fn test_int_accepts_float_cells() {
        let row = RawRow::from_pairs([("year", "2025.0")]);
        assert_eq!(row.int("year"), 2025);
    }

    #[test]
    fn test_negative_values() {
        let row = RawRow::from_pairs([("profitLoss", "-1234.56")]);
        assert_relative_eq!(row.num("profitLoss"), -1234.56);
    }
}
