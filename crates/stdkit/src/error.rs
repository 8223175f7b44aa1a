//! Error types for the support helpers.

use thiserror::Error;

/// Errors raised when configuring an [`ExponentialBackoff`](crate::ExponentialBackoff).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BackoffError {
    /// The minimum wait time exceeds the maximum.
    #[error("max must be larger than min (min {min} ms, max {max} ms)")]
    InvalidRange { min: u64, max: u64 },
}

/// Errors that can occur while writing CSV.
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("row conversion failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// A row did not serialize to a map of columns.
    #[error("row {index} is not an object")]
    NotARecord { index: usize },
}
