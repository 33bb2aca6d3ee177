//! Error types for dataset operations.

use thiserror::Error;

/// Result type for dataset operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading a dataset.
///
/// Row-level problems never surface here: malformed cells are coerced to
/// defaults during normalization. Only structural failures (the file is
/// missing, unreadable, or not valid CSV) are reported.
#[derive(Debug, Error)]
pub enum DataError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset file missing from the data directory
    #[error("Missing dataset {name}: {reason}")]
    MissingDataset {
        /// Dataset file name that was requested
        name: String,
        /// Reason the dataset could not be read
        reason: String,
    },
}
