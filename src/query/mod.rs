mod categories;
mod currency_filter;
mod descriptions;
mod stages;

pub use categories::{count_by_category, CategoryCounts};
pub use currency_filter::{filter_by_currency, CurrencyFilter};
pub use descriptions::{transaction_descriptions, Descriptions};
pub use stages::{filter_by_state, limit, parse_limit, search_by_description, sort_by_date};
