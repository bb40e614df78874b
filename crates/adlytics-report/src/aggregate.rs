//! Time-bucket and dimension aggregation
//!
//! Records are grouped by `(bucket start, dimension)` into [`AdTotals`] sums;
//! business records are summed separately by bucket and joined at the
//! Overall dimension. A bucket with campaign data but no business data keeps
//! its business side absent (not zero) so TACOS stays undefined for it.
//!
//! Storage is `BTreeMap`, so iteration is chronologically sorted and merging
//! partial aggregations is order-independent.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use adlytics_core::{
    bucket_start, metrics, AdTotals, BusinessRecord, BusinessTotals, CampaignRecord, DateRange,
    Granularity, PortfolioGroup, Segment,
};

/// Business dimension of an aggregate row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Overall,
    Portfolio(PortfolioGroup),
    Segment(Segment),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Overall => f.write_str("Overall"),
            Dimension::Portfolio(group) => group.fmt(f),
            Dimension::Segment(segment) => segment.fmt(f),
        }
    }
}

/// One aggregated bucket × dimension cell, with the joined business totals
/// when they exist (Overall dimension only)
#[derive(Debug, Clone, Copy)]
pub struct AggregateRow<'a> {
    pub bucket: NaiveDate,
    pub dimension: Dimension,
    pub ads: &'a AdTotals,
    pub business: Option<&'a BusinessTotals>,
}

impl AggregateRow<'_> {
    /// Joined total sales; `None` when no business data matched this bucket
    pub fn total_sales(&self) -> Option<Decimal> {
        self.business.map(|b| b.sales)
    }

    /// TACOS ratio; undefined without business data, and that is distinct
    /// from a true zero
    pub fn tacos(&self) -> Option<Decimal> {
        metrics::tacos(self.ads.spend, self.total_sales())
    }

    /// Organic sales; `None` without business data
    pub fn organic_sales(&self) -> Option<Decimal> {
        self.total_sales()
            .map(|total| metrics::organic_sales(total, self.ads.ad_sales))
    }
}

/// Summed campaign and business data at one granularity
#[derive(Debug, Clone)]
pub struct Aggregation {
    granularity: Granularity,
    ads: BTreeMap<(NaiveDate, Dimension), AdTotals>,
    business: BTreeMap<NaiveDate, BusinessTotals>,
}

impl Aggregation {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            ads: BTreeMap::new(),
            business: BTreeMap::new(),
        }
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Add one campaign record under Overall plus its portfolio and segment
    /// dimensions
    pub fn add_campaign(&mut self, record: &CampaignRecord) {
        let bucket = bucket_start(record.date, self.granularity);
        let dimensions = [
            Dimension::Overall,
            Dimension::Portfolio(record.portfolio_group()),
            Dimension::Segment(record.segment()),
        ];
        for dimension in dimensions {
            self.ads
                .entry((bucket, dimension))
                .or_default()
                .add_record(record);
        }
    }

    /// Add one business record; duplicate dates sum into the same bucket
    pub fn add_business(&mut self, record: &BusinessRecord) {
        let bucket = bucket_start(record.date, self.granularity);
        self.business.entry(bucket).or_default().add_record(record);
    }

    /// Merge a partial aggregation built at the same granularity.
    /// Merge order never affects the result.
    pub fn merge(&mut self, other: &Aggregation) {
        debug_assert_eq!(self.granularity, other.granularity);
        for (key, totals) in &other.ads {
            self.ads.entry(*key).or_default().merge(totals);
        }
        for (bucket, totals) in &other.business {
            self.business.entry(*bucket).or_default().merge(totals);
        }
    }

    /// Sorted distinct bucket starts that have campaign data
    pub fn buckets(&self) -> Vec<NaiveDate> {
        let mut buckets: Vec<NaiveDate> = self.ads.keys().map(|(bucket, _)| *bucket).collect();
        buckets.dedup();
        buckets
    }

    /// Campaign totals for one bucket × dimension cell
    pub fn ads(&self, bucket: NaiveDate, dimension: Dimension) -> Option<&AdTotals> {
        self.ads.get(&(bucket, dimension))
    }

    /// Business totals for one bucket
    pub fn business(&self, bucket: NaiveDate) -> Option<&BusinessTotals> {
        self.business.get(&bucket)
    }

    /// Whether any business data was supplied at all
    pub fn has_business_data(&self) -> bool {
        !self.business.is_empty()
    }

    /// Campaign totals summed over all buckets of a dimension
    pub fn totals(&self, dimension: Dimension) -> AdTotals {
        let mut totals = AdTotals::default();
        for ((_, dim), cell) in &self.ads {
            if *dim == dimension {
                totals.merge(cell);
            }
        }
        totals
    }

    /// Business totals summed over all buckets, `None` when no business data
    /// was supplied (distinct from a true zero)
    pub fn business_total(&self) -> Option<BusinessTotals> {
        if self.business.is_empty() {
            return None;
        }
        let mut totals = BusinessTotals::default();
        for cell in self.business.values() {
            totals.merge(cell);
        }
        Some(totals)
    }

    /// Joined view of one bucket at a dimension. Business data joins at
    /// Overall only; the business report has no portfolio or segment
    /// breakdown.
    pub fn row(&self, bucket: NaiveDate, dimension: Dimension) -> Option<AggregateRow<'_>> {
        let ads = self.ads(bucket, dimension)?;
        let business = match dimension {
            Dimension::Overall => self.business(bucket),
            _ => None,
        };
        Some(AggregateRow {
            bucket,
            dimension,
            ads,
            business,
        })
    }

    /// Buckets with campaign data but no matching business data.
    ///
    /// Only meaningful when business data was supplied at all; with no
    /// business report every bucket would be a gap, which the caller reports
    /// once instead.
    pub fn join_gaps(&self) -> Vec<NaiveDate> {
        if self.business.is_empty() {
            return Vec::new();
        }
        self.buckets()
            .into_iter()
            .filter(|bucket| !self.business.contains_key(bucket))
            .collect()
    }
}

/// Aggregate both inputs at a granularity, applying the inclusive date-range
/// filter first.
pub fn aggregate(
    campaign: &[CampaignRecord],
    business: &[BusinessRecord],
    granularity: Granularity,
    date_range: Option<&DateRange>,
) -> Aggregation {
    let in_range = |date: NaiveDate| date_range.map_or(true, |range| range.contains(date));

    let mut aggregation = Aggregation::new(granularity);
    for record in campaign {
        if in_range(record.date) {
            aggregation.add_campaign(record);
        }
    }
    for record in business {
        if in_range(record.date) {
            aggregation.add_business(record);
        }
    }

    tracing::debug!(
        granularity = %granularity,
        buckets = aggregation.buckets().len(),
        "aggregated input records"
    );
    aggregation
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn campaign(day: u32, name: &str, portfolio: &str, spend: u32, sales: u32) -> CampaignRecord {
        CampaignRecord {
            date: date(2024, 9, day),
            portfolio_name: portfolio.into(),
            campaign_name: name.into(),
            impressions: 1000,
            clicks: 50,
            spend: Decimal::from(spend),
            ad_sales: Decimal::from(sales),
            ad_orders: 5,
        }
    }

    fn business(day: u32, sales: u32) -> BusinessRecord {
        BusinessRecord {
            date: date(2024, 9, day),
            ordered_product_sales: Decimal::from(sales),
            units_ordered: 10,
            sessions: 100,
        }
    }

    #[test]
    fn test_overall_equals_sum_of_segments() {
        let records = vec![
            campaign(1, "Krelll Branded", "US-JN", 10, 40),
            campaign(1, "Generic Widgets", "US-Other", 5, 10),
            campaign(2, "Krelll - PAT - Rivals", "US-JN", 3, 6),
        ];
        let agg = aggregate(&records, &[], Granularity::Monthly, None);

        let overall = agg.totals(Dimension::Overall);
        let mut by_segment = AdTotals::default();
        for segment in Segment::ALL {
            by_segment.merge(&agg.totals(Dimension::Segment(segment)));
        }
        assert_eq!(overall, by_segment);

        let mut by_portfolio = AdTotals::default();
        for group in PortfolioGroup::ALL {
            by_portfolio.merge(&agg.totals(Dimension::Portfolio(group)));
        }
        assert_eq!(overall, by_portfolio);
    }

    #[test]
    fn test_business_joins_overall_only() {
        let records = vec![campaign(1, "Krelll Branded", "US-JN", 10, 40)];
        let agg = aggregate(&records, &[business(1, 200)], Granularity::Daily, None);

        let overall = agg.row(date(2024, 9, 1), Dimension::Overall).unwrap();
        assert_eq!(overall.total_sales(), Some(Decimal::from(200)));
        assert_eq!(overall.tacos(), Some("0.05".parse().unwrap()));
        assert_eq!(overall.organic_sales(), Some(Decimal::from(160)));

        let branded = agg
            .row(date(2024, 9, 1), Dimension::Segment(Segment::Branded))
            .unwrap();
        assert_eq!(branded.total_sales(), None);
        assert_eq!(branded.tacos(), None);
    }

    #[test]
    fn test_join_gap_leaves_tacos_undefined() {
        let records = vec![
            campaign(1, "Generic", "", 10, 40),
            campaign(2, "Generic", "", 10, 40),
        ];
        // Business data only for Sep 1
        let agg = aggregate(&records, &[business(1, 200)], Granularity::Daily, None);

        assert_eq!(agg.join_gaps(), vec![date(2024, 9, 2)]);
        let gap_row = agg.row(date(2024, 9, 2), Dimension::Overall).unwrap();
        assert_eq!(gap_row.tacos(), None);
        // A true zero is also undefined TACOS but not a join gap
        assert!(agg.row(date(2024, 9, 1), Dimension::Overall).unwrap().tacos().is_some());
    }

    #[test]
    fn test_no_business_data_reports_no_gaps() {
        let records = vec![campaign(1, "Generic", "", 10, 40)];
        let agg = aggregate(&records, &[], Granularity::Daily, None);
        assert!(!agg.has_business_data());
        assert!(agg.join_gaps().is_empty());
        assert_eq!(agg.business_total(), None);
    }

    #[test]
    fn test_duplicate_business_dates_are_summed() {
        let agg = aggregate(
            &[],
            &[business(1, 200), business(1, 50)],
            Granularity::Daily,
            None,
        );
        assert_eq!(agg.business(date(2024, 9, 1)).unwrap().sales, Decimal::from(250));
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let records = vec![
            campaign(1, "Generic", "", 10, 0),
            campaign(15, "Generic", "", 20, 0),
            campaign(30, "Generic", "", 40, 0),
        ];
        let range = DateRange::new(date(2024, 9, 1), date(2024, 9, 15)).unwrap();
        let agg = aggregate(&records, &[], Granularity::Monthly, Some(&range));
        assert_eq!(agg.totals(Dimension::Overall).spend, Decimal::from(30));
    }

    #[test]
    fn test_partition_merge_equals_single_pass() {
        let records: Vec<CampaignRecord> = (1..=20)
            .map(|day| campaign(day, "Generic", "US-JN", day, day * 2))
            .collect();
        let business: Vec<BusinessRecord> = (1..=20).map(|day| business(day, day * 10)).collect();

        let whole = aggregate(&records, &business, Granularity::Weekly, None);

        let mut merged = aggregate(&records[..7], &business[..13], Granularity::Weekly, None);
        let rest = aggregate(&records[7..], &business[13..], Granularity::Weekly, None);
        merged.merge(&rest);

        assert_eq!(whole.buckets(), merged.buckets());
        for bucket in whole.buckets() {
            assert_eq!(
                whole.ads(bucket, Dimension::Overall),
                merged.ads(bucket, Dimension::Overall)
            );
            assert_eq!(whole.business(bucket), merged.business(bucket));
        }
    }

    fn arb_record() -> impl Strategy<Value = CampaignRecord> {
        (1u32..=30, 0u32..500, 0u32..2000, 0u64..10_000, 0u64..500, 0u64..100, 0usize..4).prop_map(
            |(day, spend, sales, impressions, clicks, orders, name_idx)| {
                let names = ["Krelll Branded", "Krelll - PAT - X", "Generic", "jn launch"];
                CampaignRecord {
                    date: date(2024, 9, day),
                    portfolio_name: if name_idx % 2 == 0 { "US-JN".into() } else { String::new() },
                    campaign_name: names[name_idx].into(),
                    impressions,
                    clicks,
                    spend: Decimal::from(spend),
                    ad_sales: Decimal::from(sales),
                    ad_orders: orders,
                }
            },
        )
    }

    proptest! {
        /// Splitting the record set at any point and merging the partial
        /// aggregations matches a single pass, in either merge order.
        #[test]
        fn prop_aggregation_is_associative(
            records in proptest::collection::vec(arb_record(), 0..40),
            split in 0usize..40,
        ) {
            let split = split.min(records.len());
            let whole = aggregate(&records, &[], Granularity::Weekly, None);

            let left = aggregate(&records[..split], &[], Granularity::Weekly, None);
            let right = aggregate(&records[split..], &[], Granularity::Weekly, None);

            let mut forward = left.clone();
            forward.merge(&right);
            let mut backward = right.clone();
            backward.merge(&left);

            for bucket in whole.buckets() {
                for segment in Segment::ALL {
                    let dim = Dimension::Segment(segment);
                    prop_assert_eq!(whole.ads(bucket, dim), forward.ads(bucket, dim));
                    prop_assert_eq!(whole.ads(bucket, dim), backward.ads(bucket, dim));
                }
                let dim = Dimension::Overall;
                prop_assert_eq!(whole.ads(bucket, dim), forward.ads(bucket, dim));
                prop_assert_eq!(whole.ads(bucket, dim), backward.ads(bucket, dim));
            }
        }
    }
}
