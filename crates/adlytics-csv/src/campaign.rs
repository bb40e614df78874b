//! Campaign performance report reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use adlytics_core::CampaignRecord;

use crate::error::IngestResult;
use crate::fields;
use crate::header::ColumnMap;
use crate::options::ReadOptions;
use crate::summary::{RowError, RunSummary};

/// Resolved column indices for the campaign export
#[derive(Debug)]
struct Columns {
    date: usize,
    portfolio: usize,
    campaign: usize,
    impressions: usize,
    clicks: usize,
    spend: usize,
    sales: usize,
    orders: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> IngestResult<Self> {
        let map = ColumnMap::from_headers(headers);
        Ok(Self {
            date: map.require(&["Date"])?,
            portfolio: map.require(&["Portfolio name"])?,
            campaign: map.require(&["Campaign Name"])?,
            impressions: map.require(&["Impressions"])?,
            clicks: map.require(&["Clicks"])?,
            spend: map.require(&["Spend"])?,
            sales: map.require(&["7 Day Total Sales", "7-Day Total Sales", "Sales"])?,
            orders: map.require(&["7 Day Total Orders (#)", "7-Day Total Orders", "Orders"])?,
        })
    }

    /// Fixed export field order, for header-less input
    fn positional() -> Self {
        Self {
            date: 0,
            portfolio: 1,
            campaign: 2,
            impressions: 3,
            clicks: 4,
            spend: 5,
            sales: 6,
            orders: 7,
        }
    }
}

fn parse_row(record: &csv::StringRecord, cols: &Columns) -> Result<CampaignRecord, RowError> {
    let get = |idx: usize| record.get(idx).unwrap_or("");

    let date =
        fields::parse_date(get(cols.date)).map_err(|reason| RowError::new("Date", reason))?;
    let campaign_name = get(cols.campaign).trim();
    if campaign_name.is_empty() {
        return Err(RowError::new("Campaign Name", "campaign name is empty".to_string()));
    }
    let impressions = fields::parse_count(get(cols.impressions))
        .map_err(|reason| RowError::new("Impressions", reason))?;
    let clicks =
        fields::parse_count(get(cols.clicks)).map_err(|reason| RowError::new("Clicks", reason))?;
    let spend =
        fields::parse_amount(get(cols.spend)).map_err(|reason| RowError::new("Spend", reason))?;
    let ad_sales = fields::parse_amount(get(cols.sales))
        .map_err(|reason| RowError::new("7 Day Total Sales", reason))?;
    let ad_orders = fields::parse_count(get(cols.orders))
        .map_err(|reason| RowError::new("7 Day Total Orders", reason))?;

    Ok(CampaignRecord {
        date,
        portfolio_name: get(cols.portfolio).trim().to_string(),
        campaign_name: campaign_name.to_string(),
        impressions,
        clicks,
        spend,
        ad_sales,
        ad_orders,
    })
}

/// Campaign report file reader
pub struct CampaignReader;

impl CampaignReader {
    /// Read a campaign export file into records plus a run summary
    pub fn read_file<P: AsRef<Path>>(
        path: P,
        options: &ReadOptions,
    ) -> IngestResult<(Vec<CampaignRecord>, RunSummary)> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read a campaign export from a reader
    pub fn read<R: Read>(
        reader: R,
        options: &ReadOptions,
    ) -> IngestResult<(Vec<CampaignRecord>, RunSummary)> {
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
                    if record.clicks > record.impressions {
                        // Expected to be rare; logged but never rejected
                        tracing::warn!(
                            row,
                            clicks = record.clicks,
                            impressions = record.impressions,
                            "clicks exceed impressions"
                        );
                    }
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
            "campaign report ingested"
        );
        Ok((records, summary))
    }
}
