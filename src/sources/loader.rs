use std::path::Path;

use tracing::{error, info, instrument, warn};

use crate::sources::{CsvSource, JsonSource, RowSource, SourceError, XlsxSource};
use crate::types::RawRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Csv,
    Xlsx
}

impl SourceFormat {
    /// Picks the format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let extension = path.extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(SourceFormat::Json),
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xls" => Ok(SourceFormat::Xlsx),
            _ => Err(SourceError::UnsupportedFormat(path.display().to_string()))
        }
    }

    pub fn source(&self) -> &'static dyn RowSource {
        match self {
            SourceFormat::Json => &JsonSource,
            SourceFormat::Csv => &CsvSource,
            SourceFormat::Xlsx => &XlsxSource
        }
    }
}

/// Reads raw rows from `path`, choosing the reader by extension.
pub fn try_load_rows(path: &Path) -> Result<Vec<RawRow>, SourceError> {
    let format = SourceFormat::from_path(path)?;

    format.source().read_rows(path)
}

/// Reads raw rows from `path`, never failing.
///
/// A missing, unreadable or malformed file is logged and yields no rows.
#[instrument(level = "debug")]
pub fn load_rows(path: &Path) -> Vec<RawRow> {
    if !path.exists() {
        warn!("File {} was not found", path.display());
        return Vec::new();
    }

    match try_load_rows(path) {
        Ok(rows) => {
            info!("Loaded {} operations from {}", rows.len(), path.display());
            rows
        }
        Err(error) => {
            error!("Error reading operations from {}: {error}", path.display());
            Vec::new()
        }
    }
}
