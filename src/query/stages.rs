use crate::models::Transaction;
use crate::types::{SortOrder, TransactionState};

/// Keeps the transactions whose state is exactly `state`, in their original order.
pub fn filter_by_state(transactions: &[Transaction], state: TransactionState) -> Vec<Transaction> {
    transactions.iter()
        .filter(|transaction| transaction.has_state(state))
        .cloned()
        .collect()
}

/// Stable sort on the lexical value of the date; equal dates keep their relative order.
///
/// Transactions without a date sort before every dated one.
pub fn sort_by_date(transactions: &[Transaction], order: SortOrder) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();

    match order {
        SortOrder::Ascending => sorted.sort_by(|left, right| left.date.cmp(&right.date)),
        SortOrder::Descending => sorted.sort_by(|left, right| right.date.cmp(&left.date))
    }

    sorted
}

/// Keeps transactions that have a description containing `needle`, ignoring case.
///
/// The needle is matched literally, never as a pattern.
pub fn search_by_description(transactions: &[Transaction], needle: &str) -> Vec<Transaction> {
    let needle = needle.to_lowercase();

    transactions.iter()
        .filter(|transaction| {
            transaction.description.as_deref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Returns the first `count` transactions, or all of them when `count` is `None`.
pub fn limit(transactions: &[Transaction], count: Option<usize>) -> Vec<Transaction> {
    let count = count.unwrap_or(transactions.len());

    transactions.iter().take(count).cloned().collect()
}

/// Reads a limit typed by a user. Only a plain non-negative integer counts; anything
/// else (empty text, signs, letters) means "no limit".
pub fn parse_limit(raw: &str) -> Option<usize> {
    let raw = raw.trim();

    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    raw.parse().ok()
}
