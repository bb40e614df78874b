//! Additive counter blocks
//!
//! [`AdTotals`] and [`BusinessTotals`] are the only state the aggregator
//! accumulates. Both are plain sums, so merging is associative and
//! commutative: summing the same records in any order, or merging partial
//! sums from any partition, yields identical totals. Derived metrics are
//! methods computed from the sums on read, never stored fields.

use rust_decimal::Decimal;

use crate::metrics;
use crate::record::{BusinessRecord, CampaignRecord};

/// Summed base counters for a set of campaign records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AdTotals {
    pub impressions: u64,
    pub clicks: u64,
    pub spend: Decimal,
    pub ad_sales: Decimal,
    pub orders: u64,
}

impl AdTotals {
    /// Add one campaign record's counters
    pub fn add_record(&mut self, record: &CampaignRecord) {
        self.impressions += record.impressions;
        self.clicks += record.clicks;
        self.spend += record.spend;
        self.ad_sales += record.ad_sales;
        self.orders += record.ad_orders;
    }

    /// Merge another partial sum into this one
    pub fn merge(&mut self, other: &AdTotals) {
        self.impressions += other.impressions;
        self.clicks += other.clicks;
        self.spend += other.spend;
        self.ad_sales += other.ad_sales;
        self.orders += other.orders;
    }

    pub fn roas(&self) -> Option<Decimal> {
        metrics::roas(self.ad_sales, self.spend)
    }

    pub fn acos(&self) -> Option<Decimal> {
        metrics::acos(self.spend, self.ad_sales)
    }

    pub fn cvr(&self) -> Option<Decimal> {
        metrics::cvr(self.orders, self.clicks)
    }

    pub fn cpc(&self) -> Option<Decimal> {
        metrics::cpc(self.spend, self.clicks)
    }

    pub fn ctr(&self) -> Option<Decimal> {
        metrics::ctr(self.clicks, self.impressions)
    }
}

/// Summed base counters for a set of business report records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BusinessTotals {
    pub sales: Decimal,
    pub units: u64,
    pub sessions: u64,
}

impl BusinessTotals {
    /// Add one business record's counters.
    ///
    /// Duplicate dates in the export sum here too; split business exports
    /// are expected.
    pub fn add_record(&mut self, record: &BusinessRecord) {
        self.sales += record.ordered_product_sales;
        self.units += record.units_ordered;
        self.sessions += record.sessions;
    }

    /// Merge another partial sum into this one
    pub fn merge(&mut self, other: &BusinessTotals) {
        self.sales += other.sales;
        self.units += other.units;
        self.sessions += other.sessions;
    }
}
