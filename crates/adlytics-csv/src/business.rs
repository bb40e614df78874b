//! Seller business report reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use adlytics_core::BusinessRecord;

use crate::error::IngestResult;
use crate::fields;
use crate::header::ColumnMap;
use crate::options::ReadOptions;
use crate::summary::{RowError, RunSummary};

/// Resolved column indices for the business export
#[derive(Debug)]
struct Columns {
    date: usize,
    sales: usize,
    units: usize,
    sessions: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> IngestResult<Self> {
        let map = ColumnMap::from_headers(headers);
        Ok(Self {
            date: map.require(&["Date"])?,
            sales: map.require(&["Ordered Product Sales"])?,
            units: map.require(&["Units Ordered"])?,
            sessions: map.require(&["Sessions", "Sessions - Total"])?,
        })
    }

    /// Fixed export field order, for header-less input
    fn positional() -> Self {
        Self {
            date: 0,
            sales: 1,
            units: 2,
            sessions: 3,
        }
    }
}

fn parse_row(record: &csv::StringRecord, cols: &Columns) -> Result<BusinessRecord, RowError> {
    let get = |idx: usize| record.get(idx).unwrap_or("");

    let date =
        fields::parse_date(get(cols.date)).map_err(|reason| RowError::new("Date", reason))?;
    let ordered_product_sales = fields::parse_amount(get(cols.sales))
        .map_err(|reason| RowError::new("Ordered Product Sales", reason))?;
    let units_ordered = fields::parse_count(get(cols.units))
        .map_err(|reason| RowError::new("Units Ordered", reason))?;
    let sessions = fields::parse_count(get(cols.sessions))
        .map_err(|reason| RowError::new("Sessions", reason))?;

    Ok(BusinessRecord {
        date,
        ordered_product_sales,
        units_ordered,
        sessions,
    })
}

/// Business report file reader.
///
/// Duplicate dates are allowed and pass through as separate records; the
/// aggregator sums them (split business exports are common).
pub struct BusinessReader;

impl BusinessReader {
    /// Read a business export file into records plus a run summary
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        options: &ReadOptions,
    ) -> IngestResult<(Vec<BusinessRecord>, RunSummary)> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read a business export from a reader
    pub fn read<R: Read>(
        reader: R,
        options: &ReadOptions,
    ) -> IngestResult<(Vec<BusinessRecord>, RunSummary)> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_headers)
            .flexible(true)
            .from_reader(reader);

        let columns = if options.has_headers {
            Columns::resolve(csv_reader.headers()?)?
        } else {
            Columns::positional()
        };

        let mut records = Vec::new();
        let mut summary = RunSummary::default();

        for (idx, result) in csv_reader.records().enumerate() {
            let row = if options.has_headers { idx + 2 } else { idx + 1 };
            summary.rows_read += 1;

            let raw = match result {
                Ok(raw) => raw,
                Err(err) => {
                    summary.record_skip(row, "row", err.to_string());
                    continue;
                }
            };

            match parse_row(&raw, &columns) {
                Ok(record) => {
                    summary.rows_parsed += 1;
                    records.push(record);
                }
                Err(err) => summary.record_skip(row, err.field, err.reason),
            }
        }

        tracing::debug!(
            rows = summary.rows_read,
            parsed = summary.rows_parsed,
            skipped = summary.skipped(),
            "business report ingested"
        );
        Ok((records, summary))
    }
}
