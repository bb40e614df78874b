//! Executive summary and dimension breakdown tables

use adlytics_core::{metrics, AdTotals, Column, Field, Polarity, PortfolioGroup, Segment, Table};

use crate::aggregate::{Aggregation, Dimension};

/// Overall headline metrics as Metric/Value rows.
///
/// Total Sales and TACOS are blank when no business report was supplied.
pub fn executive_summary(aggregation: &Aggregation) -> Table {
    let overall = aggregation.totals(Dimension::Overall);
    let total_sales = aggregation.business_total().map(|b| b.sales);

    let mut table = Table::new(
        "Executive Summary",
        vec![Column::new("Metric"), Column::new("Value")],
    );
    table.push_row(vec![Field::text("Ad Spend"), Field::Amount(overall.spend)]);
    table.push_row(vec![Field::text("Ad Sales"), Field::Amount(overall.ad_sales)]);
    table.push_row(vec![Field::text("ROAS"), Field::number(overall.roas())]);
    table.push_row(vec![Field::text("ACoS"), Field::percent(overall.acos())]);
    table.push_row(vec![Field::text("Total Sales"), Field::amount(total_sales)]);
    table.push_row(vec![
        Field::text("TACOS"),
        Field::percent(metrics::tacos(overall.spend, total_sales)),
    ]);
    table.push_row(vec![Field::text("Orders"), Field::Count(overall.orders)]);
    table.push_row(vec![Field::text("Clicks"), Field::Count(overall.clicks)]);
    table.push_row(vec![Field::text("CVR"), Field::percent(overall.cvr())]);
    table
}

fn breakdown_columns(dimension_header: &str) -> Vec<Column> {
    vec![
        Column::new(dimension_header),
        Column::new("Spend"),
        Column::new("Sales").with_polarity(Polarity::HigherIsBetter),
        Column::new("ROAS").with_polarity(Polarity::HigherIsBetter),
        Column::new("ACoS").with_polarity(Polarity::LowerIsBetter),
        Column::new("Orders"),
        Column::new("Clicks"),
        Column::new("CVR").with_polarity(Polarity::HigherIsBetter),
        Column::new("CTR").with_polarity(Polarity::HigherIsBetter),
        Column::new("CPC").with_polarity(Polarity::LowerIsBetter),
    ]
}

fn breakdown_row(label: String, totals: &AdTotals) -> Vec<Field> {
    vec![
        Field::Text(label),
        Field::Amount(totals.spend),
        Field::Amount(totals.ad_sales),
        Field::number(totals.roas()),
        Field::percent(totals.acos()),
        Field::Count(totals.orders),
        Field::Count(totals.clicks),
        Field::percent(totals.cvr()),
        Field::percent(totals.ctr()),
        Field::number(totals.cpc()),
    ]
}

/// One row per campaign segment over the whole range
pub fn segment_performance(aggregation: &Aggregation) -> Table {
    let mut table = Table::new("Segment Performance", breakdown_columns("Segment"));
    for segment in Segment::ALL {
        let totals = aggregation.totals(Dimension::Segment(segment));
        table.push_row(breakdown_row(segment.to_string(), &totals));
    }
    table
}

/// One row per portfolio group over the whole range
pub fn portfolio_breakdown(aggregation: &Aggregation) -> Table {
    let mut table = Table::new("JN-Non-JN Portfolio", breakdown_columns("Portfolio"));
    for group in PortfolioGroup::ALL {
        let totals = aggregation.totals(Dimension::Portfolio(group));
        table.push_row(breakdown_row(group.to_string(), &totals));
    }
    table
}
