//! Unified error type for the pipeline facade

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from any stage of the report pipeline
#[derive(Debug, Error)]
pub enum Error {
    /// Fatal ingest error (IO, malformed CSV structure, missing required column)
    #[error("Ingest error: {0}")]
    Ingest(#[from] adlytics_csv::IngestError),

    /// Core domain error (invalid parameters)
    #[error("{0}")]
    Core(#[from] adlytics_core::Error),
}
