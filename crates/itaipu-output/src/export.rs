//! CSV export of chart series and rendered tables.

use crate::report::TextTable;
use itaipu_series::MonthlyPoint;
use serde::Serialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Serialize)]
struct SeriesRow<'a> {
    series: &'a str,
    year: i32,
    month: u32,
    value: f64,
}

/// Write labeled monthly series to a CSV file, one row per point.
pub fn export_series(
    path: impl AsRef<Path>,
    series: &[(&str, Vec<MonthlyPoint>)],
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    for (label, points) in series {
        for point in points {
            writer.serialize(SeriesRow {
                series: label,
                year: point.year,
                month: point.month,
                value: point.value,
            })?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Write a rendered table to a CSV file, headers first.
pub fn export_table(path: impl AsRef<Path>, table: &TextTable) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(month: u32, value: f64) -> MonthlyPoint {
        MonthlyPoint {
            year: 2025,
            month,
            value,
        }
    }

    #[test]
    fn test_export_series_writes_one_row_per_point() {
        let dir = std::env::temp_dir().join("itaipu-export-series-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("series.csv");
        let series = vec![("Energia", vec![point(1, 10.0), point(2, 0.0)])];
        export_series(&path, &series).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("series,year,month,value\n"));
        assert!(contents.contains("Energia,2025,1,10.0"));
        assert_eq!(contents.lines().count(), 3);
    }

    #[test]
    fn test_export_table_includes_headers() {
        let dir = std::env::temp_dir().join("itaipu-export-table-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("table.csv");
        let mut table = TextTable::new(["Bucket", "EL"]);
        table.push_row(["Baixo risco", "100"]);
        export_table(&path, &table).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Bucket,EL\n"));
        assert!(contents.contains("Baixo risco,100"));
    }
}
