//! CSV ingest error types

use thiserror::Error;

/// Result type for ingest operations
pub type IngestResult<T> = std::result::Result<T, IngestError>;

/// Fatal errors during CSV ingest or export.
///
/// Per-row problems are not errors; they are skips recorded in a
/// [`crate::RunSummary`].
#[derive(Debug, Error)]
pub enum IngestError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row. Fatal: downstream
    /// computation cannot proceed without it.
    #[error("Missing required column: {0}")]
    MissingColumn(String),
}
