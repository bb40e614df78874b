//! # adlytics-core
//!
//! Core data model for the adlytics campaign reporting pipeline.
//!
//! This crate provides the fundamental types used throughout adlytics:
//! - [`CampaignRecord`] and [`BusinessRecord`] - typed rows of the two input exports
//! - [`Segment`] and [`PortfolioGroup`] - name-based classification
//! - [`AdTotals`] and [`BusinessTotals`] - additive counter blocks that all
//!   derived metrics are computed from on read
//! - [`Table`] - the generic tabular output surface consumed by exporters
//!   and the presentation layer
//!
//! ## Example
//!
//! ```rust
//! use adlytics_core::{classify_segment, metrics, Segment};
//! use rust_decimal::Decimal;
//!
//! assert_eq!(classify_segment("Krelll Branded Exact"), Segment::Branded);
//!
//! // Metrics are undefined (None) on division by zero, never coerced to 0.
//! assert_eq!(metrics::roas(Decimal::from(100), Decimal::ZERO), None);
//! ```

pub mod bucket;
pub mod classify;
pub mod error;
pub mod metrics;
pub mod params;
pub mod record;
pub mod table;
pub mod totals;

// Re-exports for convenience
pub use bucket::{bucket_label, bucket_start, Granularity};
pub use classify::{classify_portfolio, classify_segment, PortfolioGroup, Segment};
pub use error::{Error, Result};
pub use params::{DateRange, PortfolioFilter};
pub use record::{BusinessRecord, CampaignRecord};
pub use table::{Column, Field, Polarity, Table};
pub use totals::{AdTotals, BusinessTotals};
