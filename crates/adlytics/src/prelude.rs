//! Prelude module - common imports for adlytics users
//!
//! ```rust
//! use adlytics::prelude::*;
//! ```

pub use crate::{
    // Pipeline entry points
    build_tables,
    generate_report,

    // Classification
    classify_portfolio,
    classify_segment,

    // Aggregation
    aggregate,
    AggregateRow,
    Aggregation,
    Dimension,

    // Comparison
    change,
    change_between,
    Change,

    // Core types
    AdTotals,
    BusinessRecord,
    BusinessTotals,
    CampaignRecord,
    DateRange,
    Granularity,
    PortfolioFilter,
    PortfolioGroup,
    Segment,

    // Output tables
    Column,
    Field,
    Polarity,
    Table,

    // Ingest
    BusinessReader,
    CampaignReader,
    IngestError,
    ReadOptions,
    RowSkip,
    RunSummary,
    TableWriter,

    // Error types
    Error,
    Result,

    // Pipeline types
    ReportBundle,
    ReportOptions,
};
