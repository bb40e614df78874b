//! # adlytics-report
//!
//! The aggregation and report-building stages of the adlytics pipeline.
//!
//! [`aggregate`] buckets classified campaign records by time period and
//! business dimension and joins business-report totals by bucket. The table
//! builders then assemble the named output tables (Executive Summary,
//! Performance Trends, pivots, ...) with period-over-period comparison
//! columns.
//!
//! Aggregation is a plain associative sum: splitting the input into any
//! partitions, aggregating each, and merging yields the same totals as a
//! single pass, which keeps batched or parallel ingestion safe.

pub mod aggregate;
pub mod compare;
pub mod pivot;
pub mod summary;
pub mod trends;

pub use aggregate::{aggregate, AggregateRow, Aggregation, Dimension};
pub use compare::{change, change_between, Change};
pub use pivot::{pivot_portfolio, pivot_segment};
pub use summary::{executive_summary, portfolio_breakdown, segment_performance};
pub use trends::{organic_vs_paid, performance_trends, periodic_analysis};
