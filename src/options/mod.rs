mod errors;
mod report_options;

pub use errors::OptionsError;
pub use report_options::{parse_log_level, ReportOptions};
