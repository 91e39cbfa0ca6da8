use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::error;

use crate::sources::{RowSource, SourceError};
use crate::types::RawRow;

/// Reads a semicolon delimited file with a header row of flattened column names.
pub struct CsvSource;

impl RowSource for CsvSource {
    fn read_rows(&self, path: &Path) -> Result<Vec<RawRow>, SourceError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .trim(Trim::All)
            .flexible(true)
            .from_reader(BufReader::new(File::open(path)?));

        let headers = reader.headers()?.clone();
        let mut rows = Vec::new();

        for result in reader.records() {
            match result {
                Ok(record) => rows.push(to_row(&headers, &record)),
                Err(error) => error!("CSV read error in {}: {error}", path.display())
            }
        }

        Ok(rows)
    }
}

fn to_row(headers: &StringRecord, record: &StringRecord) -> RawRow {
    headers.iter()
        .zip(record.iter())
        .map(|(header, value)| (header, (!value.is_empty()).then(|| value.to_string())))
        .collect()
}
