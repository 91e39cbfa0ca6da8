mod conversion;
mod errors;
mod exchange_rates;

pub use conversion::{convert_to_rub, total_in_rub, BASE_CURRENCY};
pub use errors::ConversionError;
pub use exchange_rates::ExchangeRates;
