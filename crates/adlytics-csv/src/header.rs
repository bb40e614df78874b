//! Header resolution
//!
//! Real exports are sloppy about headers: trailing spaces ("7 Day Total
//! Sales "), unit suffixes ("7 Day Total Orders (#)"), and a UTF-8 BOM on
//! the first cell. Lookup is therefore by normalized name: lowercased with
//! everything non-alphanumeric stripped, which absorbs all of the above.

use std::collections::HashMap;

use crate::error::{IngestError, IngestResult};

pub(crate) fn normalize(header: &str) -> String {
    header
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Maps normalized header names to column indices
#[derive(Debug)]
pub(crate) struct ColumnMap {
    indices: HashMap<String, usize>,
}

impl ColumnMap {
    pub(crate) fn from_headers(headers: &csv::StringRecord) -> Self {
        let indices = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (normalize(header), idx))
            .collect();
        Self { indices }
    }

    /// Index of the first matching alias, or a fatal `MissingColumn` error
    /// naming the canonical (first) alias.
    pub(crate) fn require(&self, aliases: &[&str]) -> IngestResult<usize> {
        aliases
            .iter()
            .find_map(|alias| self.indices.get(&normalize(alias)).copied())
            .ok_or_else(|| IngestError::MissingColumn(aliases[0].to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_noise() {
        assert_eq!(normalize("7 Day Total Sales "), "7daytotalsales");
        assert_eq!(normalize("7 Day Total Orders (#)"), "7daytotalorders");
        assert_eq!(normalize("Sessions - Total"), "sessionstotal");
        // BOM on the first header cell
        assert_eq!(normalize("\u{feff}Date"), "date");
    }

    #[test]
    fn test_require_with_aliases() {
        let headers = csv::StringRecord::from(vec!["Date", "Sessions - Total"]);
        let map = ColumnMap::from_headers(&headers);
        assert_eq!(map.require(&["Date"]).unwrap(), 0);
        assert_eq!(map.require(&["Sessions", "Sessions - Total"]).unwrap(), 1);

        let err = map.require(&["Units Ordered"]).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(name) if name == "Units Ordered"));
    }
}
