//! Derived marketing metrics
//!
//! Every metric is a pure function of base counters and is computed on read,
//! never stored. The division-by-zero contract is the important one here: an
//! undefined metric is `None`, and is rendered as a blank cell downstream.
//! It is never coerced to zero (which would be a lie in the report) and never
//! an error (missing denominators are an everyday data condition).
//!
//! Percentage-style metrics (ACoS, TACOS, CVR, CTR) are returned as plain
//! ratios; multiplication by 100 happens only at presentation.

use rust_decimal::Decimal;

/// Return on ad spend: ad_sales / spend. `None` when spend is zero.
pub fn roas(ad_sales: Decimal, spend: Decimal) -> Option<Decimal> {
    if spend.is_zero() {
        None
    } else {
        Some(ad_sales / spend)
    }
}

/// Advertising cost of sales ratio: spend / ad_sales. `None` when ad_sales is zero.
pub fn acos(spend: Decimal, ad_sales: Decimal) -> Option<Decimal> {
    if ad_sales.is_zero() {
        None
    } else {
        Some(spend / ad_sales)
    }
}

/// Total advertising cost of sales ratio: spend / total_sales.
///
/// `None` when total sales are zero *or* absent. An absent value means no
/// business data was joined for the period; the caller surfaces that join gap
/// separately, but either way the metric is undefined rather than 0%.
pub fn tacos(spend: Decimal, total_sales: Option<Decimal>) -> Option<Decimal> {
    match total_sales {
        Some(total) if !total.is_zero() => Some(spend / total),
        _ => None,
    }
}

/// Conversion rate ratio: orders / clicks. `None` when clicks is zero.
pub fn cvr(orders: u64, clicks: u64) -> Option<Decimal> {
    if clicks == 0 {
        None
    } else {
        Some(Decimal::from(orders) / Decimal::from(clicks))
    }
}

/// Cost per click: spend / clicks. `None` when clicks is zero.
pub fn cpc(spend: Decimal, clicks: u64) -> Option<Decimal> {
    if clicks == 0 {
        None
    } else {
        Some(spend / Decimal::from(clicks))
    }
}

/// Click-through rate ratio: clicks / impressions. `None` when impressions is zero.
pub fn ctr(clicks: u64, impressions: u64) -> Option<Decimal> {
    if impressions == 0 {
        None
    } else {
        Some(Decimal::from(clicks) / Decimal::from(impressions))
    }
}

/// Organic sales: total_sales - ad_sales, floored at zero.
///
/// Attributed ad sales can exceed total sales because the 7-day attribution
/// window lags the business report's daily totals. That is a known
/// data-quality condition, not an error, so the subtraction is clamped.
pub fn organic_sales(total_sales: Decimal, ad_sales: Decimal) -> Decimal {
    (total_sales - ad_sales).max(Decimal::ZERO)
}
