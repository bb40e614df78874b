//! Run summaries for non-fatal ingest problems

use std::fmt;

/// One skipped input row and why it was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSkip {
    /// 1-based line number in the input file (header is line 1)
    pub row: usize,
    /// The offending field
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for RowSkip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}: {}", self.row, self.field, self.reason)
    }
}

/// Aggregated outcome of one reader pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data rows seen in the input (excluding the header)
    pub rows_read: usize,
    /// Rows that parsed into records
    pub rows_parsed: usize,
    /// Rows that were skipped, with reasons
    pub skips: Vec<RowSkip>,
}

impl RunSummary {
    /// Number of skipped rows
    pub fn skipped(&self) -> usize {
        self.skips.len()
    }

    pub(crate) fn record_skip(&mut self, row: usize, field: &'static str, reason: String) {
        tracing::warn!(row, field, %reason, "skipping malformed row");
        self.skips.push(RowSkip { row, field, reason });
    }
}

/// Per-row parse failure, folded into a [`RowSkip`] by the readers
#[derive(Debug)]
pub(crate) struct RowError {
    pub(crate) field: &'static str,
    pub(crate) reason: String,
}

impl RowError {
    pub(crate) fn new(field: &'static str, reason: String) -> Self {
        Self { field, reason }
    }
}
