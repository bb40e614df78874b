//! Typed input records
//!
//! One record per row of the two report exports. Classification is computed
//! from the name fields on demand and never stored, so a record can't drift
//! out of sync with its own names.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::classify::{classify_portfolio, classify_segment, PortfolioGroup, Segment};

/// A single row of the campaign performance export
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CampaignRecord {
    pub date: NaiveDate,
    /// May be empty; records without a portfolio classify as Non-JN
    pub portfolio_name: String,
    pub campaign_name: String,
    pub impressions: u64,
    pub clicks: u64,
    pub spend: Decimal,
    /// Sales attributed to ads within the 7-day attribution window
    pub ad_sales: Decimal,
    /// Orders attributed to ads within the 7-day attribution window
    pub ad_orders: u64,
}

impl CampaignRecord {
    /// Segment derived from the campaign name
    pub fn segment(&self) -> Segment {
        classify_segment(&self.campaign_name)
    }

    /// Portfolio group derived from the portfolio name
    pub fn portfolio_group(&self) -> PortfolioGroup {
        classify_portfolio(&self.portfolio_name)
    }
}

/// A single row of the seller business report export
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BusinessRecord {
    pub date: NaiveDate,
    pub ordered_product_sales: Decimal,
    pub units_ordered: u64,
    pub sessions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_derived_from_names() {
        let record = CampaignRecord {
            date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            portfolio_name: "US-JN-Main".into(),
            campaign_name: "Krelll Branded Exact".into(),
            impressions: 1000,
            clicks: 50,
            spend: Decimal::from(25),
            ad_sales: Decimal::from(100),
            ad_orders: 5,
        };
        assert_eq!(record.segment(), Segment::Branded);
        assert_eq!(record.portfolio_group(), PortfolioGroup::Jn);
    }
}
