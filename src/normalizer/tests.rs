use super::{Field, Normalizer};
use crate::types::RawRow;

fn create_full_row() -> RawRow {
    RawRow::new()
        .with("id", "650703")
        .with("state", "EXECUTED")
        .with("date", "2023-09-05T11:30:32Z")
        .with("amount", "16210")
        .with("currency_name", "Sol")
        .with("currency_code", "PEN")
        .with("from", "Счет 58803664561298323391")
        .with("to", "Счет 39745660563456619397")
        .with("description", "Перевод организации")
}

#[test]
fn test_normalizer_reshapes_a_complete_row() {
    let transaction = Normalizer::new().normalize(&create_full_row());

    assert_eq!(transaction.id.as_deref(), Some("650703"));
    assert_eq!(transaction.state.as_deref(), Some("EXECUTED"));
    assert_eq!(transaction.date.as_deref(), Some("2023-09-05T11:30:32Z"));
    assert_eq!(transaction.description.as_deref(), Some("Перевод организации"));
    assert_eq!(transaction.from.as_deref(), Some("Счет 58803664561298323391"));
    assert_eq!(transaction.to.as_deref(), Some("Счет 39745660563456619397"));
    assert_eq!(transaction.operation_amount.amount, "16210");
    assert_eq!(transaction.operation_amount.currency.name, "Sol");
    assert_eq!(transaction.operation_amount.currency.code, "PEN");
}

#[test]
fn test_normalizer_applies_defaults_to_amount_and_currency() {
    let row = RawRow::new().with("id", "1");
    let transaction = Normalizer::new().normalize(&row);

    assert_eq!(transaction.operation_amount.amount, "0");
    assert_eq!(transaction.operation_amount.currency.name, "руб.");
    assert_eq!(transaction.operation_amount.currency.code, "RUB");
}

#[test]
fn test_normalizer_marks_fields_without_defaults_as_missing() {
    let transaction = Normalizer::new().normalize(&RawRow::new());

    assert_eq!(transaction.id, None);
    assert_eq!(transaction.state, None);
    assert_eq!(transaction.date, None);
    assert_eq!(transaction.description, None);
    assert_eq!(transaction.from, None);
    assert_eq!(transaction.to, None);
}

#[test]
fn test_normalizer_treats_missing_cells_like_absent_keys() {
    let mut row = RawRow::new();
    row.insert("currency_code", None);
    row.insert("from", None);

    let transaction = Normalizer::new().normalize(&row);

    assert_eq!(transaction.operation_amount.currency.code, "RUB");
    assert_eq!(transaction.from, None);
}

#[test]
fn test_normalizer_keeps_empty_values_distinct_from_missing_ones() {
    let row = RawRow::new().with("description", "").with("amount", "");
    let transaction = Normalizer::new().normalize(&row);

    assert_eq!(transaction.description.as_deref(), Some(""));
    assert_eq!(transaction.operation_amount.amount, "");
}

#[test]
fn test_normalizer_defaults_table_can_be_overridden() {
    let normalizer = Normalizer::new()
        .with_default(Field::CurrencyCode, "USD")
        .with_default(Field::State, "PENDING");

    let transaction = normalizer.normalize(&RawRow::new());

    assert_eq!(normalizer.default_for(Field::Amount), Some("0"));
    assert_eq!(transaction.operation_amount.currency.code, "USD");
    assert_eq!(transaction.state.as_deref(), Some("PENDING"));
}

#[test]
fn test_normalizer_ignores_unknown_columns() {
    let row = create_full_row().with("comment", "ignored");
    let transaction = Normalizer::new().normalize(&row);

    assert_eq!(transaction, Normalizer::new().normalize(&create_full_row()));
}

#[test]
fn test_normalize_all_preserves_row_order() {
    let rows = vec![
        RawRow::new().with("id", "1"),
        RawRow::new().with("id", "2"),
        RawRow::new().with("id", "3")
    ];

    let ids: Vec<_> = Normalizer::new().normalize_all(&rows).into_iter()
        .filter_map(|transaction| transaction.id)
        .collect();

    assert_eq!(ids, vec!["1", "2", "3"]);
    assert!(Normalizer::new().normalize_all(&Vec::<RawRow>::new()).is_empty());
}

#[test]
fn test_field_keys_are_unique() {
    let mut keys: Vec<_> = Field::ALL.iter().map(Field::key).collect();
    keys.sort();
    keys.dedup();

    assert_eq!(keys.len(), Field::ALL.len());
}
