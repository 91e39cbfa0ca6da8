use std::iter::FusedIterator;

use crate::models::Transaction;

/// Lazily yields the description of each transaction that has one.
#[derive(Debug)]
pub struct Descriptions<I> {
    source: I
}

pub fn transaction_descriptions<'a, I>(transactions: I) -> Descriptions<I::IntoIter>
where
    I: IntoIterator<Item = &'a Transaction>
{
    Descriptions { source: transactions.into_iter() }
}

impl<'a, I: Iterator<Item = &'a Transaction>> Iterator for Descriptions<I> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.source.find_map(|transaction| transaction.description.as_deref())
    }
}

impl<'a, I: FusedIterator<Item = &'a Transaction>> FusedIterator for Descriptions<I> {}
