//! Generic output tables
//!
//! The pipeline's output surface is a collection of named [`Table`]s: rows of
//! typed [`Field`]s under named [`Column`]s. Downstream consumers (CSV export,
//! the spreadsheet presentation layer) treat these as opaque tabular data.
//!
//! [`Field::Blank`] is the single representation of an undefined value, e.g.
//! a divide-by-zero metric or a missing period-over-period comparison.
//! [`Field::Percent`] holds the *ratio*; rendering multiplies by 100.

use std::fmt;

use rust_decimal::Decimal;

/// Improvement direction of a metric column, for presentation color-coding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Polarity {
    /// Larger values are better (Spend deltas, Sales, ROAS, CVR, CTR)
    HigherIsBetter,
    /// Smaller values are better (ACoS, TACOS, CPC)
    LowerIsBetter,
}

impl Polarity {
    /// Whether a signed delta counts as an improvement under this polarity
    pub fn is_improvement(&self, delta: Decimal) -> bool {
        match self {
            Polarity::HigherIsBetter => delta >= Decimal::ZERO,
            Polarity::LowerIsBetter => delta <= Decimal::ZERO,
        }
    }
}

/// A named table column, optionally carrying a metric polarity
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Column {
    pub header: String,
    pub polarity: Option<Polarity>,
}

impl Column {
    pub fn new<S: Into<String>>(header: S) -> Self {
        Self {
            header: header.into(),
            polarity: None,
        }
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = Some(polarity);
        self
    }
}

/// A single typed cell of an output table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Field {
    /// Undefined value; renders as an empty cell
    Blank,
    /// Label or name
    Text(String),
    /// Integer counter (impressions, clicks, orders, units, sessions)
    Count(u64),
    /// Currency amount
    Amount(Decimal),
    /// Plain number (ROAS, CPC)
    Number(Decimal),
    /// Ratio rendered as a percentage
    Percent(Decimal),
}

impl Field {
    pub fn text<S: Into<String>>(s: S) -> Self {
        Field::Text(s.into())
    }

    /// Amount from an optional value; `None` becomes [`Field::Blank`]
    pub fn amount(value: Option<Decimal>) -> Self {
        value.map_or(Field::Blank, Field::Amount)
    }

    /// Number from an optional value; `None` becomes [`Field::Blank`]
    pub fn number(value: Option<Decimal>) -> Self {
        value.map_or(Field::Blank, Field::Number)
    }

    /// Percent from an optional ratio; `None` becomes [`Field::Blank`]
    pub fn percent(ratio: Option<Decimal>) -> Self {
        ratio.map_or(Field::Blank, Field::Percent)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Field::Blank)
    }
}

impl fmt::Display for Field {
    /// Presentation rendering: percents ×100 with one decimal, amounts and
    /// numbers with two decimals, blanks as empty strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Blank => Ok(()),
            Field::Text(s) => f.write_str(s),
            Field::Count(n) => write!(f, "{}", n),
            Field::Amount(d) => write!(f, "{:.2}", d),
            Field::Number(d) => write!(f, "{:.2}", d),
            Field::Percent(ratio) => write!(f, "{:.1}%", ratio * Decimal::ONE_HUNDRED),
        }
    }
}

/// A named output table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Field>>,
}

impl Table {
    pub fn new<S: Into<String>>(name: S, columns: Vec<Column>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row; must match the column count
    pub fn push_row(&mut self, row: Vec<Field>) {
        debug_assert_eq!(row.len(), self.columns.len(), "row width mismatch in {}", self.name);
        self.rows.push(row);
    }

    /// Column headers in order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.header.as_str())
    }
}
