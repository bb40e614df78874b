//! End-to-end report pipeline

use std::path::Path;

use chrono::NaiveDate;

use adlytics_core::{
    BusinessRecord, CampaignRecord, DateRange, Granularity, PortfolioFilter, Table,
};
use adlytics_csv::{BusinessReader, CampaignReader, ReadOptions, RunSummary};
use adlytics_report::{
    aggregate, executive_summary, organic_vs_paid, performance_trends, periodic_analysis,
    pivot_portfolio, pivot_segment, portfolio_breakdown, segment_performance,
};

use crate::error::Result;

/// Pipeline parameters, threaded explicitly through the run
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Inclusive date filter applied to both inputs before aggregation
    pub date_range: Option<DateRange>,
    /// Portfolio view for the Performance Trends table
    pub portfolio: PortfolioFilter,
    /// Time-period view for the Performance Trends table
    pub granularity: Granularity,
    /// CSV read options for both inputs
    pub read: ReadOptions,
}

/// Everything one pipeline run produces
#[derive(Debug, Clone)]
pub struct ReportBundle {
    /// The named output tables, in report order
    pub tables: Vec<Table>,
    /// Ingest outcome for the campaign export
    pub campaign_summary: RunSummary,
    /// Ingest outcome for the business export, when one was supplied
    pub business_summary: Option<RunSummary>,
    /// Monthly buckets with campaign data but no business data
    pub join_gaps: Vec<NaiveDate>,
}

impl ReportBundle {
    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }
}

/// Build the full table set from already-parsed records.
///
/// This is the in-memory core of [`generate_report`]; it never fails, since
/// every fallible step (IO, header validation, parameter validation) happens
/// before it.
pub fn build_tables(
    campaign: &[CampaignRecord],
    business: &[BusinessRecord],
    options: &ReportOptions,
) -> (Vec<Table>, Vec<NaiveDate>) {
    let range = options.date_range.as_ref();
    let monthly = aggregate(campaign, business, Granularity::Monthly, range);
    let weekly = aggregate(campaign, business, Granularity::Weekly, range);
    let view = aggregate(campaign, business, options.granularity, range);

    let join_gaps = monthly.join_gaps();
    for bucket in &join_gaps {
        tracing::warn!(%bucket, "campaign data without matching business data; TACOS undefined");
    }

    let tables = vec![
        executive_summary(&monthly),
        segment_performance(&monthly),
        performance_trends(&view, options.portfolio),
        periodic_analysis(&monthly),
        periodic_analysis(&weekly),
        organic_vs_paid(&monthly),
        portfolio_breakdown(&monthly),
        pivot_portfolio(&monthly),
        pivot_segment(&monthly),
    ];
    (tables, join_gaps)
}

/// Run the whole pipeline from export files to a [`ReportBundle`].
///
/// The business export is optional; without it every business-derived value
/// (Total Sales, TACOS, Organic) is blank. Fatal errors (unreadable file,
/// missing required column) abort before any output is produced.
pub fn generate_report(
    campaign_path: &Path,
    business_path: Option<&Path>,
    options: &ReportOptions,
) -> Result<ReportBundle> {
    let (campaign, campaign_summary) = CampaignReader::read_file(campaign_path, &options.read)?;
    tracing::info!(
        path = %campaign_path.display(),
        parsed = campaign_summary.rows_parsed,
        skipped = campaign_summary.skipped(),
        "campaign report loaded"
    );

    let (business, business_summary) = match business_path {
        Some(path) => {
            let (records, summary) = BusinessReader::read_file(path, &options.read)?;
            tracing::info!(
                path = %path.display(),
                parsed = summary.rows_parsed,
                skipped = summary.skipped(),
                "business report loaded"
            );
            (records, Some(summary))
        }
        None => {
            tracing::warn!("no business report supplied; TACOS and organic metrics will be blank");
            (Vec::new(), None)
        }
    };

    let (tables, join_gaps) = build_tables(&campaign, &business, options);

    Ok(ReportBundle {
        tables,
        campaign_summary,
        business_summary,
        join_gaps,
    })
}
