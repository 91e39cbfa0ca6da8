use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use crate::options::OptionsError;
use crate::query::parse_limit;
use crate::rates::ExchangeRates;
use crate::types::{SortOrder, TransactionState};

/// Everything the command line can ask for: which file to read, which stages to run
/// and how verbose the log on stderr should be.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    pub input: PathBuf,
    pub state: Option<TransactionState>,
    pub sort: Option<SortOrder>,
    pub currency: Option<String>,
    pub search: Option<String>,
    /// `None` shows every selected transaction.
    pub limit: Option<usize>,
    pub categories: Vec<String>,
    pub rates: ExchangeRates,
    pub log_level: LevelFilter
}

impl ReportOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            state: None,
            sort: None,
            currency: None,
            search: None,
            limit: None,
            categories: Vec::new(),
            rates: ExchangeRates::new(),
            log_level: LevelFilter::ERROR
        }
    }

    /// Parses `<input> [key=value ...]`, without the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>
    {
        let mut args = args.into_iter();
        let input = args.next().ok_or(OptionsError::MissingInput)?;
        let mut options = ReportOptions::new(input.as_ref());

        for argument in args {
            let argument = argument.as_ref();
            let (key, value) = argument.split_once('=')
                .ok_or_else(|| OptionsError::MalformedArgument(argument.to_string()))?;

            options.apply(key.trim(), value.trim())?;
        }

        Ok(options)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<(), OptionsError> {
        match key.to_lowercase().as_str() {
            "state" => self.state = Some(value.parse()?),
            "sort" => self.sort = Some(value.parse()?),
            "currency" => self.currency = non_empty(value).map(str::to_uppercase),
            "search" => self.search = non_empty(value).map(str::to_string),
            "limit" => self.limit = parse_limit(value),
            "categories" => {
                self.categories = value.split(',')
                    .filter_map(|category| non_empty(category.trim()))
                    .map(str::to_string)
                    .collect();
            }
            "rates" => self.rates = value.parse()?,
            "log" => self.log_level = parse_log_level(value),
            _ => return Err(OptionsError::UnknownOption(key.to_string()))
        }

        Ok(())
    }
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            //NOTE: Logging is not set up yet when options are parsed, so this goes straight to stderr
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
