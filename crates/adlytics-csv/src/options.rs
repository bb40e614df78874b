//! CSV read options

/// Options for reading report exports
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// Whether the first row is a header. When false, columns are resolved
    /// by the fixed export field order instead of by name.
    pub has_headers: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            has_headers: true,
        }
    }
}
