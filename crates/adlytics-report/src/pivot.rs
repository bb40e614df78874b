//! Cross-tab pivot tables
//!
//! Months as columns, one row per (metric, group). Spend and Sales cells
//! with no activity are true zeros; ROAS cells stay blank where the group
//! had no spend that month.

use adlytics_core::{bucket_label, AdTotals, Column, Field, PortfolioGroup, Segment, Table};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::aggregate::{Aggregation, Dimension};

#[derive(Clone, Copy)]
enum PivotMetric {
    Spend,
    Sales,
    Roas,
}

impl PivotMetric {
    const ALL: [PivotMetric; 3] = [PivotMetric::Spend, PivotMetric::Sales, PivotMetric::Roas];

    fn header(self) -> &'static str {
        match self {
            PivotMetric::Spend => "Spend",
            PivotMetric::Sales => "Sales",
            PivotMetric::Roas => "ROAS",
        }
    }

    fn cell(self, totals: Option<&AdTotals>) -> Field {
        match self {
            // No records for this cell means zero spend/sales, a real zero
            PivotMetric::Spend => {
                Field::Amount(totals.map_or(Decimal::ZERO, |t| t.spend))
            }
            PivotMetric::Sales => {
                Field::Amount(totals.map_or(Decimal::ZERO, |t| t.ad_sales))
            }
            PivotMetric::Roas => Field::number(totals.and_then(AdTotals::roas)),
        }
    }
}

fn pivot<D: std::fmt::Display + Copy>(
    name: &str,
    group_header: &str,
    aggregation: &Aggregation,
    groups: &[D],
    dimension: impl Fn(D) -> Dimension,
) -> Table {
    let buckets: Vec<NaiveDate> = aggregation.buckets();

    let mut columns = vec![Column::new("Metric"), Column::new(group_header)];
    columns.extend(
        buckets
            .iter()
            .map(|bucket| Column::new(bucket_label(*bucket, aggregation.granularity()))),
    );
    let mut table = Table::new(name, columns);

    for metric in PivotMetric::ALL {
        for group in groups {
            let mut row = vec![Field::text(metric.header()), Field::text(group.to_string())];
            for bucket in &buckets {
                row.push(metric.cell(aggregation.ads(*bucket, dimension(*group))));
            }
            table.push_row(row);
        }
    }
    table
}

/// Portfolio-group cross-tab over monthly buckets
pub fn pivot_portfolio(aggregation: &Aggregation) -> Table {
    pivot(
        "Pivot-Portfolio",
        "Portfolio",
        aggregation,
        &PortfolioGroup::ALL,
        Dimension::Portfolio,
    )
}

/// Segment cross-tab over monthly buckets
pub fn pivot_segment(aggregation: &Aggregation) -> Table {
    pivot(
        "Pivot-Segment",
        "Segment",
        aggregation,
        &Segment::ALL,
        Dimension::Segment,
    )
}
