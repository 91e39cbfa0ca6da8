use std::collections::HashMap;

use tracing::trace;

use crate::models::{Currency, OperationAmount, Transaction};
use crate::normalizer::Field;
use crate::types::RawRow;

const DEFAULT_AMOUNT: &str = "0";
const DEFAULT_CURRENCY_NAME: &str = "руб.";
const DEFAULT_CURRENCY_CODE: &str = "RUB";

/// Reshapes raw rows from any input source into canonical [`Transaction`] records.
///
/// Lookups are driven by a single table of per-field defaults. A field without a default
/// that is absent from the row stays missing (`None`). No field content is validated.
#[derive(Debug, Clone)]
pub struct Normalizer {
    defaults: HashMap<Field, String>
}

impl Normalizer {
    pub fn new() -> Self {
        let defaults = HashMap::from([
            (Field::Amount, DEFAULT_AMOUNT.to_string()),
            (Field::CurrencyName, DEFAULT_CURRENCY_NAME.to_string()),
            (Field::CurrencyCode, DEFAULT_CURRENCY_CODE.to_string())
        ]);

        Self { defaults }
    }

    /// Overrides (or adds) the value used when `field` is missing from a row.
    pub fn with_default(mut self, field: Field, value: impl Into<String>) -> Self {
        self.defaults.insert(field, value.into());
        self
    }

    pub fn default_for(&self, field: Field) -> Option<&str> {
        self.defaults.get(&field).map(String::as_str)
    }

    pub fn normalize(&self, row: &RawRow) -> Transaction {
        let transaction = Transaction {
            id: self.lookup(row, Field::Id),
            state: self.lookup(row, Field::State),
            date: self.lookup(row, Field::Date),
            description: self.lookup(row, Field::Description),
            from: self.lookup(row, Field::From),
            to: self.lookup(row, Field::To),
            operation_amount: OperationAmount {
                amount: self.required(row, Field::Amount),
                currency: Currency {
                    name: self.required(row, Field::CurrencyName),
                    code: self.required(row, Field::CurrencyCode)
                }
            }
        };

        trace!("Normalized transaction [{:?}]", transaction.id);

        transaction
    }

    pub fn normalize_all<'a>(&self, rows: impl IntoIterator<Item = &'a RawRow>) -> Vec<Transaction> {
        rows.into_iter().map(|row| self.normalize(row)).collect()
    }

    fn lookup(&self, row: &RawRow, field: Field) -> Option<String> {
        row.get(field.key())
            .or_else(|| self.default_for(field))
            .map(str::to_string)
    }

    fn required(&self, row: &RawRow, field: Field) -> String {
        self.lookup(row, field).unwrap_or_default()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
