//! # adlytics
//!
//! A pipeline that turns two raw tabular exports (an advertising-campaign
//! performance report and a seller business report) into a set of named
//! report tables: classified, aggregated by time bucket and business
//! dimension, with derived metrics and period-over-period comparisons
//! pre-computed.
//!
//! The pipeline runs in fixed stages: parse -> classify -> compute metrics
//! -> aggregate -> build tables. Each stage consumes the prior stage's
//! output immutably; a fatal error anywhere produces no output at all,
//! while malformed input rows are skipped and counted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use adlytics::prelude::*;
//!
//! let options = ReportOptions::default();
//! let bundle = generate_report("campaigns.csv".as_ref(), None, &options).unwrap();
//!
//! for table in &bundle.tables {
//!     println!("{}: {} rows", table.name, table.rows.len());
//! }
//! ```

pub mod error;
pub mod pipeline;
pub mod prelude;

pub use error::{Error, Result};
pub use pipeline::{build_tables, generate_report, ReportBundle, ReportOptions};

// Re-export the member crates' public surface
pub use adlytics_core::{
    bucket_label, bucket_start, classify_portfolio, classify_segment, metrics, AdTotals,
    BusinessRecord, BusinessTotals, CampaignRecord, Column, DateRange, Field, Granularity,
    Polarity, PortfolioFilter, PortfolioGroup, Segment, Table,
};
pub use adlytics_csv::{
    BusinessReader, CampaignReader, IngestError, ReadOptions, RowSkip, RunSummary, TableWriter,
};
pub use adlytics_report::{
    aggregate, change, change_between, executive_summary, organic_vs_paid, performance_trends,
    periodic_analysis, pivot_portfolio, pivot_segment, portfolio_breakdown, segment_performance,
    AggregateRow, Aggregation, Change, Dimension,
};
