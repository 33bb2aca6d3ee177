//! Asynchronous dataset loading from a local data directory.
//!
//! Each view loads the handful of sheets it needs concurrently and joins
//! them fail-fast before any transformation runs: either every sheet is
//! available or the caller gets the first error and renders empty. There is
//! no retry and no partial-data path.

use crate::dataset::Dataset;
use crate::error::{DataError, Result};
use crate::raw::RawRow;
use futures::future::try_join_all;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Handle to the directory holding the exported dataset sheets.
#[derive(Debug, Clone)]
pub struct DataDirectory {
    root: PathBuf,
}

impl DataDirectory {
    /// Create a handle rooted at `root`. The directory is not touched until
    /// a dataset is loaded.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Load one dataset sheet into raw rows.
    pub async fn load(&self, dataset: Dataset) -> Result<Vec<RawRow>> {
        let path = self.root.join(dataset.file_name());
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => DataError::MissingDataset {
                    name: dataset.file_name().to_string(),
                    reason: format!("not found in {}", self.root.display()),
                },
                _ => DataError::Io(e),
            })?;
        parse_rows(&bytes)
    }

    /// Load several datasets concurrently, joined fail-fast.
    pub async fn load_many(&self, datasets: &[Dataset]) -> Result<HashMap<Dataset, Vec<RawRow>>> {
        let loads = datasets.iter().map(|&dataset| async move {
            let rows = self.load(dataset).await?;
            log::debug!("loaded {} rows from {}", rows.len(), dataset.file_name());
            Ok::<_, DataError>((dataset, rows))
        });
        Ok(try_join_all(loads).await?.into_iter().collect())
    }

    /// Load every sheet in the catalog.
    pub async fn load_all(&self) -> Result<HashMap<Dataset, Vec<RawRow>>> {
        self.load_many(&Dataset::ALL).await
    }
}

/// Parse CSV bytes into raw rows, keyed by the header line.
///
/// Ragged rows are tolerated; cells past the header width are dropped and
/// short rows simply leave their trailing columns absent.
fn parse_rows(bytes: &[u8]) -> Result<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);
    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = RawRow::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            row.set(header, cell);
        }
        rows.push(row);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows_keys_by_header() {
        let csv = b"year,month,netVolume\n2025,3,10.5\n2025,4,-2\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].int("year"), 2025);
        assert_eq!(rows[0].num("netVolume"), 10.5);
        assert_eq!(rows[1].num("netVolume"), -2.0);
    }

    #[test]
    fn test_parse_rows_tolerates_short_rows() {
        let csv = b"year,month,netVolume\n2025,3\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].num("netVolume"), 0.0);
    }

    #[tokio::test]
    async fn test_missing_dataset_is_reported() {
        let dir = DataDirectory::new("/nonexistent/data");
        let err = dir.load(Dataset::Net).await.unwrap_err();
        assert!(matches!(err, DataError::MissingDataset { .. }));
    }
}
