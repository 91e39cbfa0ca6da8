use std::path::Path;

use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::SubsecRound;

use crate::sources::{RowSource, SourceError};
use crate::types::RawRow;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Reads the first worksheet of a workbook, using its first row as column names.
pub struct XlsxSource;

impl RowSource for XlsxSource {
    fn read_rows(&self, path: &Path) -> Result<Vec<RawRow>, SourceError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook.worksheet_range_at(0).ok_or(SourceError::EmptyWorkbook)??;

        Ok(XlsxSource::rows_from_range(&range))
    }
}

impl XlsxSource {
    /// Maps every non-blank row under the header row to a raw row keyed by header name.
    pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
        let mut sheet_rows = range.rows();
        let Some(header_row) = sheet_rows.next() else {
            return Vec::new();
        };

        let headers: Vec<Option<String>> = header_row.iter().map(cell_text).collect();

        sheet_rows
            .filter(|cells| cells.iter().any(|cell| cell_text(cell).is_some()))
            .map(|cells| {
                headers.iter()
                    .zip(cells)
                    .filter_map(|(header, cell)| header.as_ref().map(|header| (header.as_str(), cell_text(cell))))
                    .collect::<RawRow>()
            })
            .collect()
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(text) | Data::DateTimeIso(text) => {
            let text = text.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Data::DateTime(datetime) => Some(timestamp_text(datetime)),
        Data::Float(value) => Some(value.to_string()),
        Data::Int(value) => Some(value.to_string()),
        other => Some(other.to_string())
    }
}

/// Date cells become `YYYY-MM-DDTHH:MM:SS`, rounded to the second, so they order like
/// timestamps from the other sources.
fn timestamp_text(datetime: &ExcelDateTime) -> String {
    match datetime.as_datetime() {
        Some(value) => value.round_subsecs(0).format(TIMESTAMP_FORMAT).to_string(),
        None => datetime.as_f64().to_string()
    }
}
