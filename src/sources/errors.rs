use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Source error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Source error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Source error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("Source error: Workbook has no worksheets")]
    EmptyWorkbook,
    #[error("Source error: Unsupported file type '{0}', expected .json, .csv or .xlsx")]
    UnsupportedFormat(String)
}
