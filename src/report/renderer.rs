use std::io::{self, Write};

use tracing::warn;

use crate::masking::{format_date, mask_identifier};
use crate::models::Transaction;
use crate::query::CategoryCounts;

/// Shown in place of an endpoint or date that is missing or cannot be masked.
pub const UNAVAILABLE: &str = "Недоступно";

/// Formats one transaction as display lines: date and description, endpoints, amount.
///
/// The source endpoint is left out for deposit openings.
pub fn render_transaction(transaction: &Transaction) -> Vec<String> {
    let date = display_date(transaction.date.as_deref());
    let description = transaction.description.as_deref().unwrap_or_default();
    let to = display_endpoint(transaction.to.as_deref());

    let endpoints = if transaction.is_deposit_opening() {
        to
    } else {
        format!("{} -> {to}", display_endpoint(transaction.from.as_deref()))
    };

    vec![
        format!("{date} {description}"),
        endpoints,
        format!("Сумма: {} {}", transaction.amount(), transaction.currency_code())
    ]
}

/// Writes the report to any output, stdout in the binary.
pub struct ReportRenderer<W: Write> {
    output: W
}

impl<W: Write> ReportRenderer<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    /// Writes the summary line followed by every transaction in order.
    ///
    /// `available` is the number selected before a limit was applied, or `None` when no
    /// limit was asked for.
    pub fn write_transactions(&mut self, shown: &[Transaction], available: Option<usize>) -> io::Result<()> {
        if shown.is_empty() {
            writeln!(self.output, "Не найдено ни одной транзакции, подходящей под ваши условия фильтрации.")?;
            return Ok(());
        }

        match available {
            Some(available) => writeln!(self.output, "Выводится {} транзакций из {available} доступных.", shown.len())?,
            None => writeln!(self.output, "Выводятся все {} транзакций.", shown.len())?
        }
        writeln!(self.output)?;

        for transaction in shown {
            for line in render_transaction(transaction) {
                writeln!(self.output, "{line}")?;
            }

            writeln!(self.output)?;
        }

        Ok(())
    }

    pub fn write_category_counts(&mut self, counts: &CategoryCounts) -> io::Result<()> {
        for (category, count) in counts.iter() {
            writeln!(self.output, "{category}: {count}")?;
        }

        Ok(())
    }

    pub fn write_total_in_rub(&mut self, total: f64) -> io::Result<()> {
        writeln!(self.output, "Итого в рублях: {total:.2}")
    }

    pub fn finish(mut self) -> io::Result<W> {
        self.output.flush()?;

        Ok(self.output)
    }
}

fn display_date(date: Option<&str>) -> String {
    let Some(date) = date else {
        return UNAVAILABLE.to_string();
    };

    format_date(date).unwrap_or_else(|error| {
        warn!("Showing date as is: {error}");
        date.to_string()
    })
}

fn display_endpoint(endpoint: Option<&str>) -> String {
    let Some(endpoint) = endpoint else {
        return UNAVAILABLE.to_string();
    };

    mask_identifier(endpoint).unwrap_or_else(|error| {
        warn!("Endpoint cannot be masked: {error}");
        UNAVAILABLE.to_string()
    })
}
