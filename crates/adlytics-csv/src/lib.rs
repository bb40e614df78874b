//! # adlytics-csv
//!
//! CSV ingest for the two report exports (campaign performance and seller
//! business report) and CSV export of output tables.
//!
//! Ingest follows a skip-and-continue policy: a missing required column is
//! fatal before any row is parsed, but individual malformed rows are
//! skipped, counted in a [`RunSummary`], and logged, so one bad export line
//! never kills a run.

pub mod business;
pub mod campaign;
pub mod error;
mod fields;
mod header;
pub mod options;
pub mod summary;
pub mod writer;

pub use business::BusinessReader;
pub use campaign::CampaignReader;
pub use error::{IngestError, IngestResult};
pub use options::ReadOptions;
pub use summary::{RowSkip, RunSummary};
pub use writer::TableWriter;
