use std::iter::FusedIterator;

use crate::models::Transaction;

/// Lazily yields the transactions paid in one currency.
///
/// Nothing is inspected until the consumer asks for the next item, and the filter owns
/// its source, so once it has been drained it stays empty.
#[derive(Debug)]
pub struct CurrencyFilter<I> {
    source: I,
    code: String
}

pub fn filter_by_currency<I>(transactions: I, code: &str) -> CurrencyFilter<I::IntoIter>
where
    I: IntoIterator<Item = Transaction>
{
    CurrencyFilter {
        source: transactions.into_iter(),
        code: code.to_string()
    }
}

impl<I: Iterator<Item = Transaction>> Iterator for CurrencyFilter<I> {
    type Item = Transaction;

    fn next(&mut self) -> Option<Self::Item> {
        let code = self.code.as_str();

        self.source.find(|transaction| transaction.currency_code() == code)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I: FusedIterator<Item = Transaction>> FusedIterator for CurrencyFilter<I> {}
