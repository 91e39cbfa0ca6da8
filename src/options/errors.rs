use thiserror::Error;

use crate::rates::ConversionError;
use crate::types::QueryError;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("An input file is required")]
    MissingInput,
    #[error("Argument '{0}' is not in the form key=value")]
    MalformedArgument(String),
    #[error("Unknown option '{0}'")]
    UnknownOption(String),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Rates(#[from] ConversionError)
}
