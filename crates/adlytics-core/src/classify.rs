//! Campaign and portfolio classification
//!
//! Classification is an ordered list of (predicate, result) rules evaluated
//! top to bottom on the lowercased name; the first match wins. Both entry
//! points are pure and total: they never fail, and identical input strings
//! classify identically across runs, which is what keeps day-to-day reports
//! comparable.

use std::fmt;

/// Campaign segment derived from the campaign name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Segment {
    /// Campaigns targeting the brand's own terms
    Branded,
    /// Product-attribute-targeting campaigns aimed at competitor listings
    Competitor,
    /// Everything else (generic keyword campaigns)
    NonBranded,
}

impl Segment {
    /// All segments, in report display order
    pub const ALL: [Segment; 3] = [Segment::Branded, Segment::Competitor, Segment::NonBranded];
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Segment::Branded => "Branded",
            Segment::Competitor => "Competitor",
            Segment::NonBranded => "Non-Branded",
        };
        f.write_str(label)
    }
}

/// Portfolio group derived from the portfolio name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PortfolioGroup {
    /// Portfolios whose name contains "jn"
    Jn,
    /// Everything else, including records with no portfolio name
    NonJn,
}

impl PortfolioGroup {
    /// All portfolio groups, in report display order
    pub const ALL: [PortfolioGroup; 2] = [PortfolioGroup::Jn, PortfolioGroup::NonJn];
}

impl fmt::Display for PortfolioGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PortfolioGroup::Jn => "JN",
            PortfolioGroup::NonJn => "Non-JN",
        };
        f.write_str(label)
    }
}

fn is_branded(name: &str) -> bool {
    name.contains("branded")
}

// " pat ", "- pat -" and "_pat_" are the naming conventions used for
// product-attribute-targeting (competitor) campaigns.
fn is_competitor(name: &str) -> bool {
    name.contains(" pat ") || name.contains("- pat -") || name.contains("_pat_")
}

/// Ordered segment rules; a name matching several rules takes the first.
/// The branded rule must stay ahead of the competitor rule.
const SEGMENT_RULES: [(fn(&str) -> bool, Segment); 2] = [
    (is_branded, Segment::Branded),
    (is_competitor, Segment::Competitor),
];

/// Classify a campaign into a [`Segment`] from its name.
///
/// Case-insensitive; unmatched names fall through to [`Segment::NonBranded`].
pub fn classify_segment(campaign_name: &str) -> Segment {
    let name = campaign_name.to_lowercase();
    for (matches, segment) in SEGMENT_RULES {
        if matches(&name) {
            return segment;
        }
    }
    Segment::NonBranded
}

/// Classify a portfolio into a [`PortfolioGroup`] from its name.
///
/// Case-insensitive substring match on "jn"; empty or missing names are
/// [`PortfolioGroup::NonJn`].
pub fn classify_portfolio(portfolio_name: &str) -> PortfolioGroup {
    if portfolio_name.to_lowercase().contains("jn") {
        PortfolioGroup::Jn
    } else {
        PortfolioGroup::NonJn
    }
}
