use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::warn;

use crate::models::Transaction;
use crate::rates::{ConversionError, ExchangeRates};

pub const BASE_CURRENCY: &str = "RUB";

/// Converts `amount` in `currency` to RUB.
///
/// RUB amounts are returned as they are. For any other currency the amount is multiplied
/// by its rate; a missing or non-positive rate converts to `0.0`.
///
/// # Errors
/// - `ConversionError::MissingAmount` when there is no amount at all.
/// - `ConversionError::InvalidAmount` when the amount text is not a number.
pub fn convert_to_rub(amount: Option<&str>, currency: &str, rates: &ExchangeRates) -> Result<f64, ConversionError> {
    let amount = amount.ok_or(ConversionError::MissingAmount)?;
    let value = parse_amount(amount)?;

    if currency == BASE_CURRENCY {
        return Ok(value);
    }

    match rates.get(currency) {
        Some(rate) if rate > 0.0 => Ok(value * rate),
        rate => {
            warn!("Invalid exchange rate for {currency}: {rate:?}");
            Ok(0.0)
        }
    }
}

/// Decimal parsing first; amounts beyond the 28 digits a `Decimal` holds fall back to `f64`.
fn parse_amount(amount: &str) -> Result<f64, ConversionError> {
    let amount = amount.trim();

    Decimal::from_str(amount)
        .ok()
        .and_then(|decimal| decimal.to_f64())
        .or_else(|| amount.parse::<f64>().ok().filter(|value| value.is_finite()))
        .ok_or_else(|| ConversionError::InvalidAmount(amount.to_string()))
}

/// Sums the RUB value of `transactions`. Amounts that cannot be converted are logged
/// and left out of the total.
pub fn total_in_rub(transactions: &[Transaction], rates: &ExchangeRates) -> f64 {
    transactions.iter()
        .filter_map(|transaction| {
            convert_to_rub(Some(transaction.amount()), transaction.currency_code(), rates)
                .inspect_err(|error| warn!("Transaction [{:?}] left out of the total: {error}", transaction.id))
                .ok()
        })
        .sum()
}
