//! CSV export of output tables

use std::fs::File;
use std::io::Write;
use std::path::Path;

use adlytics_core::Table;

use crate::error::IngestResult;

/// Writes an output [`Table`] as CSV: one header row, then each data row
/// rendered with the table field display rules (blank cells for undefined
/// values, percentages multiplied out).
pub struct TableWriter;

impl TableWriter {
    /// Write a table to a CSV file
    pub fn write_file<P: AsRef<Path>>(table: &Table, path: P) -> IngestResult<()> {
        let file = File::create(path)?;
        Self::write(table, file)
    }

    /// Write a table to a writer
    pub fn write<W: Write>(table: &Table, writer: W) -> IngestResult<()> {
        let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

        csv_writer.write_record(table.headers())?;
        for row in &table.rows {
            csv_writer.write_record(row.iter().map(ToString::to_string))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use adlytics_core::{Column, Field};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_write_renders_blanks_and_percents() {
        let mut table = Table::new(
            "Monthly Analysis",
            vec![Column::new("Month"), Column::new("Spend"), Column::new("ACoS")],
        );
        table.push_row(vec![
            Field::text("Sep 2024"),
            Field::Amount(Decimal::from(1250)),
            Field::Percent("0.25".parse().unwrap()),
        ]);
        table.push_row(vec![Field::text("Oct 2024"), Field::Amount(Decimal::ZERO), Field::Blank]);

        let mut buf = Vec::new();
        TableWriter::write(&table, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert_eq!(text, "Month,Spend,ACoS\nSep 2024,1250.00,25.0%\nOct 2024,0.00,\n");
    }
}
