//! Time-series tables: performance trends, monthly/weekly analysis,
//! organic vs paid

use adlytics_core::{
    bucket_label, metrics, Column, Field, Granularity, Polarity, PortfolioFilter, PortfolioGroup,
    Table,
};

use crate::aggregate::{Aggregation, Dimension};
use crate::compare::change;

fn filter_dimension(filter: PortfolioFilter) -> Dimension {
    match filter {
        PortfolioFilter::Overall => Dimension::Overall,
        PortfolioFilter::Jn => Dimension::Portfolio(PortfolioGroup::Jn),
        PortfolioFilter::NonJn => Dimension::Portfolio(PortfolioGroup::NonJn),
    }
}

/// Per-bucket trend rows at the selected granularity and portfolio view.
///
/// Buckets where the selected portfolio had no activity are omitted rather
/// than zero-filled.
pub fn performance_trends(aggregation: &Aggregation, filter: PortfolioFilter) -> Table {
    let dimension = filter_dimension(filter);
    let mut table = Table::new(
        "Performance Trends",
        vec![
            Column::new("Period"),
            Column::new("Impressions"),
            Column::new("Clicks"),
            Column::new("CTR").with_polarity(Polarity::HigherIsBetter),
            Column::new("CPC").with_polarity(Polarity::LowerIsBetter),
            Column::new("Spend"),
            Column::new("Sales").with_polarity(Polarity::HigherIsBetter),
            Column::new("Orders"),
            Column::new("CVR").with_polarity(Polarity::HigherIsBetter),
            Column::new("ROAS").with_polarity(Polarity::HigherIsBetter),
            Column::new("ACoS").with_polarity(Polarity::LowerIsBetter),
        ],
    );

    for bucket in aggregation.buckets() {
        let Some(row) = aggregation.row(bucket, dimension) else {
            continue;
        };
        let ads = row.ads;
        table.push_row(vec![
            Field::text(bucket_label(bucket, aggregation.granularity())),
            Field::Count(ads.impressions),
            Field::Count(ads.clicks),
            Field::percent(ads.ctr()),
            Field::number(ads.cpc()),
            Field::Amount(ads.spend),
            Field::Amount(ads.ad_sales),
            Field::Count(ads.orders),
            Field::percent(ads.cvr()),
            Field::number(ads.roas()),
            Field::percent(ads.acos()),
        ]);
    }
    table
}

/// Overall per-period rows with business joins and period-over-period
/// change columns.
///
/// The table is named "Monthly Analysis" or "Weekly Analysis" (or "Daily
/// Analysis") after the aggregation's granularity. The first period has
/// blank change cells: there is nothing to compare against.
pub fn periodic_analysis(aggregation: &Aggregation) -> Table {
    let name = match aggregation.granularity() {
        Granularity::Daily => "Daily Analysis",
        Granularity::Weekly => "Weekly Analysis",
        Granularity::Monthly => "Monthly Analysis",
    };
    let period_header = match aggregation.granularity() {
        Granularity::Daily => "Day",
        Granularity::Weekly => "Week",
        Granularity::Monthly => "Month",
    };

    let mut table = Table::new(
        name,
        vec![
            Column::new(period_header),
            Column::new("Spend"),
            Column::new("Sales").with_polarity(Polarity::HigherIsBetter),
            Column::new("ROAS").with_polarity(Polarity::HigherIsBetter),
            Column::new("ACoS").with_polarity(Polarity::LowerIsBetter),
            Column::new("Orders"),
            Column::new("Clicks"),
            Column::new("CVR").with_polarity(Polarity::HigherIsBetter),
            Column::new("Total Sales"),
            Column::new("Organic Sales").with_polarity(Polarity::HigherIsBetter),
            Column::new("TACOS").with_polarity(Polarity::LowerIsBetter),
            Column::new("Spend Change %").with_polarity(Polarity::HigherIsBetter),
            Column::new("Sales Change %").with_polarity(Polarity::HigherIsBetter),
            Column::new("ROAS Change %").with_polarity(Polarity::HigherIsBetter),
        ],
    );

    let mut previous: Option<adlytics_core::AdTotals> = None;
    for bucket in aggregation.buckets() {
        let Some(row) = aggregation.row(bucket, Dimension::Overall) else {
            continue;
        };
        let ads = *row.ads;

        let (spend_change, sales_change, roas_change) = match previous {
            Some(prev) => (
                change(prev.spend, ads.spend).percent,
                change(prev.ad_sales, ads.ad_sales).percent,
                crate::compare::change_between(prev.roas(), ads.roas())
                    .and_then(|c| c.percent),
            ),
            // First period in the series: no prior bucket to compare against
            None => (None, None, None),
        };

        table.push_row(vec![
            Field::text(bucket_label(bucket, aggregation.granularity())),
            Field::Amount(ads.spend),
            Field::Amount(ads.ad_sales),
            Field::number(ads.roas()),
            Field::percent(ads.acos()),
            Field::Count(ads.orders),
            Field::Count(ads.clicks),
            Field::percent(ads.cvr()),
            Field::amount(row.total_sales()),
            Field::amount(row.organic_sales()),
            Field::percent(row.tacos()),
            Field::percent(spend_change),
            Field::percent(sales_change),
            Field::percent(roas_change),
        ]);

        previous = Some(ads);
    }
    table
}

/// Monthly organic vs paid split.
///
/// Months without business data keep every sales-split cell blank; the ad
/// sales column still shows what the campaigns attributed.
pub fn organic_vs_paid(aggregation: &Aggregation) -> Table {
    let mut table = Table::new(
        "Organic vs Paid",
        vec![
            Column::new("Month"),
            Column::new("Total Sales"),
            Column::new("Ad Sales"),
            Column::new("Organic Sales").with_polarity(Polarity::HigherIsBetter),
            Column::new("Ad %"),
            Column::new("Organic %"),
            Column::new("TACOS").with_polarity(Polarity::LowerIsBetter),
        ],
    );

    for bucket in aggregation.buckets() {
        let Some(row) = aggregation.row(bucket, Dimension::Overall) else {
            continue;
        };
        let total = row.total_sales();
        let organic = row.organic_sales();
        let ad_share = total
            .filter(|t| !t.is_zero())
            .map(|t| row.ads.ad_sales / t);
        let organic_share = match (organic, total) {
            (Some(organic), Some(total)) if !total.is_zero() => Some(organic / total),
            _ => None,
        };

        table.push_row(vec![
            Field::text(bucket_label(bucket, aggregation.granularity())),
            Field::amount(total),
            Field::Amount(row.ads.ad_sales),
            Field::amount(organic),
            Field::percent(ad_share),
            Field::percent(organic_share),
            Field::percent(metrics::tacos(row.ads.spend, total)),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use adlytics_core::{BusinessRecord, CampaignRecord};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use crate::aggregate::aggregate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(m: u32, d: u32, portfolio: &str, spend: u32, sales: u32) -> CampaignRecord {
        CampaignRecord {
            date: date(2024, m, d),
            portfolio_name: portfolio.into(),
            campaign_name: "Generic".into(),
            impressions: 1000,
            clicks: 50,
            spend: Decimal::from(spend),
            ad_sales: Decimal::from(sales),
            ad_orders: 5,
        }
    }

    fn business(m: u32, d: u32, sales: u32) -> BusinessRecord {
        BusinessRecord {
            date: date(2024, m, d),
            ordered_product_sales: Decimal::from(sales),
            units_ordered: 10,
            sessions: 100,
        }
    }

    #[test]
    fn test_first_period_has_blank_changes() {
        let records = vec![
            record(9, 5, "", 100, 200),
            record(10, 5, "", 150, 450),
        ];
        let agg = aggregate(&records, &[], Granularity::Monthly, None);
        let table = periodic_analysis(&agg);

        assert_eq!(table.name, "Monthly Analysis");
        assert_eq!(table.rows.len(), 2);

        // September: no prior month, so every change cell is blank
        assert_eq!(table.rows[0][11], Field::Blank);
        assert_eq!(table.rows[0][12], Field::Blank);
        assert_eq!(table.rows[0][13], Field::Blank);

        // October vs September: spend +50%, sales +125%
        assert_eq!(table.rows[1][11], Field::Percent("0.5".parse().unwrap()));
        assert_eq!(table.rows[1][12], Field::Percent("1.25".parse().unwrap()));
        // ROAS 2.0 -> 3.0 is +50%
        assert_eq!(table.rows[1][13], Field::Percent("0.5".parse().unwrap()));
    }

    #[test]
    fn test_periodic_analysis_join_gap_renders_blank_tacos() {
        let records = vec![record(9, 5, "", 100, 200), record(10, 5, "", 150, 450)];
        let business = vec![business(9, 5, 1000)];
        let agg = aggregate(&records, &business, Granularity::Monthly, None);
        let table = periodic_analysis(&agg);

        // September has business data: TACOS = 100/1000
        assert_eq!(table.rows[0][10], Field::Percent("0.1".parse().unwrap()));
        // October is a join gap: total sales, organic and TACOS all blank
        assert_eq!(table.rows[1][8], Field::Blank);
        assert_eq!(table.rows[1][9], Field::Blank);
        assert_eq!(table.rows[1][10], Field::Blank);
    }

    #[test]
    fn test_performance_trends_respects_portfolio_filter() {
        let records = vec![
            record(9, 2, "US-JN", 10, 40),
            record(9, 2, "US-Other", 7, 14),
            record(9, 9, "US-Other", 3, 3),
        ];
        let agg = aggregate(&records, &[], Granularity::Weekly, None);

        let overall = performance_trends(&agg, PortfolioFilter::Overall);
        assert_eq!(overall.rows.len(), 2);
        assert_eq!(overall.rows[0][0], Field::text("Wk of 2024-09-02"));
        assert_eq!(overall.rows[0][5], Field::Amount(Decimal::from(17)));

        // JN has activity only in the first week
        let jn = performance_trends(&agg, PortfolioFilter::Jn);
        assert_eq!(jn.rows.len(), 1);
        assert_eq!(jn.rows[0][5], Field::Amount(Decimal::from(10)));
    }

    #[test]
    fn test_organic_vs_paid_splits() {
        let records = vec![record(9, 5, "", 100, 200)];
        let business = vec![business(9, 5, 1000)];
        let agg = aggregate(&records, &business, Granularity::Monthly, None);
        let table = organic_vs_paid(&agg);

        assert_eq!(table.rows.len(), 1);
        let row = &table.rows[0];
        assert_eq!(row[1], Field::Amount(Decimal::from(1000)));
        assert_eq!(row[2], Field::Amount(Decimal::from(200)));
        assert_eq!(row[3], Field::Amount(Decimal::from(800)));
        assert_eq!(row[4], Field::Percent("0.2".parse().unwrap()));
        assert_eq!(row[5], Field::Percent("0.8".parse().unwrap()));
        assert_eq!(row[6], Field::Percent("0.1".parse().unwrap()));
    }
}
