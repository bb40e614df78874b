//! Period-over-period comparison
//!
//! A comparison only exists when there is a preceding bucket: the first
//! bucket of a series has no change values at all (blank, never 0%). The
//! percentage part is additionally undefined when the previous value was
//! zero.

use rust_decimal::Decimal;

/// Change of one value versus the immediately preceding bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Change {
    /// Signed absolute difference
    pub absolute: Decimal,
    /// Signed relative change as a ratio; `None` when the previous value
    /// was zero
    pub percent: Option<Decimal>,
}

/// Compare a value against its predecessor
pub fn change(prev: Decimal, curr: Decimal) -> Change {
    let absolute = curr - prev;
    let percent = if prev.is_zero() {
        None
    } else {
        Some(absolute / prev)
    };
    Change { absolute, percent }
}

/// Compare two optional metric values; the comparison is undefined unless
/// both periods had a defined value.
pub fn change_between(prev: Option<Decimal>, curr: Option<Decimal>) -> Option<Change> {
    match (prev, curr) {
        (Some(prev), Some(curr)) => Some(change(prev, curr)),
        _ => None,
    }
}
