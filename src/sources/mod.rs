mod csv_source;
mod errors;
mod json_source;
mod loader;
mod xlsx_source;

use std::path::Path;

use crate::types::RawRow;

pub use csv_source::CsvSource;
pub use errors::SourceError;
pub use json_source::JsonSource;
pub use loader::{load_rows, try_load_rows, SourceFormat};
pub use xlsx_source::XlsxSource;

/// Reads a file of bank operations into flat raw rows.
///
/// Every implementation produces rows keyed by the same flattened column names, so the
/// normalizer never needs to know which format a row came from.
pub trait RowSource {
    fn read_rows(&self, path: &Path) -> Result<Vec<RawRow>, SourceError>;
}
