//! Raw field value parsing
//!
//! The exports format numbers for humans: "$1,234.56", quoted thousands
//! groups, percent signs left off, dates in two different layouts depending
//! on which report the row came from. Everything here returns the parse
//! failure reason as a `String` so readers can fold it into a row skip.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Date layouts observed across the two exports: "Sep 01, 2024" in campaign
/// reports, "9/1/24" in business reports, plus the unambiguous ISO form.
const DATE_FORMATS: [&str; 4] = ["%b %d, %Y", "%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("date is empty".to_string());
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .ok_or_else(|| format!("unparseable date {:?}", raw))
}

fn clean_number(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '$' | ',' | '"' | ' ' | '\u{a0}'))
        .collect()
}

/// Parse a currency or decimal amount. Blank fields default to zero;
/// negative amounts are rejected.
pub(crate) fn parse_amount(raw: &str) -> Result<Decimal, String> {
    let cleaned = clean_number(raw.trim());
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = cleaned
        .parse()
        .map_err(|_| format!("unparseable amount {:?}", raw))?;
    if value.is_sign_negative() {
        return Err(format!("negative amount {:?}", raw));
    }
    Ok(value)
}

/// Parse a non-negative integer count. Blank fields default to zero.
/// Fractional values are rejected ("12.0" is tolerated, "12.5" is not).
pub(crate) fn parse_count(raw: &str) -> Result<u64, String> {
    let value = parse_amount(raw)?;
    if !value.fract().is_zero() {
        return Err(format!("fractional count {:?}", raw));
    }
    value
        .to_u64()
        .ok_or_else(|| format!("count out of range {:?}", raw))
}
