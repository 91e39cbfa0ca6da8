use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Conversion error: Amount is missing")]
    MissingAmount,
    #[error("Conversion error: Amount '{0}' is not a number")]
    InvalidAmount(String),
    #[error("Conversion error: Invalid exchange rate '{0}', expected CODE:rate")]
    InvalidRate(String)
}
