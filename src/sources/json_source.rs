use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::sources::{RowSource, SourceError};
use crate::types::RawRow;

/// Reads a JSON array of operations with a nested `operationAmount` object.
pub struct JsonSource;

#[derive(Debug, Default, Deserialize)]
struct JsonOperation {
    id: Option<Value>,
    state: Option<String>,
    date: Option<String>,
    description: Option<String>,
    from: Option<String>,
    to: Option<String>,
    #[serde(rename = "operationAmount")]
    operation_amount: Option<JsonAmount>
}

#[derive(Debug, Default, Deserialize)]
struct JsonAmount {
    amount: Option<Value>,
    currency: Option<JsonCurrency>
}

#[derive(Debug, Default, Deserialize)]
struct JsonCurrency {
    name: Option<String>,
    code: Option<String>
}

impl RowSource for JsonSource {
    fn read_rows(&self, path: &Path) -> Result<Vec<RawRow>, SourceError> {
        let document: Value = serde_json::from_reader(BufReader::new(File::open(path)?))?;

        let Value::Array(items) = document else {
            warn!("File {} does not contain a list of operations", path.display());
            return Ok(Vec::new());
        };

        let mut rows = Vec::with_capacity(items.len());

        for (index, item) in items.into_iter().enumerate() {
            match serde_json::from_value::<JsonOperation>(item) {
                Ok(operation) => rows.push(operation.into_row()),
                Err(error) => warn!("Skipping operation #{index} in {}: {error}", path.display())
            }
        }

        Ok(rows)
    }
}

impl JsonOperation {
    fn into_row(self) -> RawRow {
        let amount = self.operation_amount.unwrap_or_default();
        let currency = amount.currency.unwrap_or_default();

        RawRow::from_iter([
            ("id", self.id.and_then(value_text)),
            ("state", self.state),
            ("date", self.date),
            ("description", self.description),
            ("from", self.from),
            ("to", self.to),
            ("amount", amount.amount.and_then(value_text)),
            ("currency_name", currency.name),
            ("currency_code", currency.code)
        ])
    }
}

fn value_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string())
    }
}
