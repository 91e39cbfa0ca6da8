use super::{render_transaction, ReportRenderer, UNAVAILABLE};
use crate::models::{Currency, OperationAmount, Transaction};
use crate::query::count_by_category;
use anyhow::Result;

fn create_transaction(description: Option<&str>, from: Option<&str>, to: Option<&str>) -> Transaction {
    Transaction {
        id: Some("441945886".to_string()),
        state: Some("EXECUTED".to_string()),
        date: Some("2019-08-26T10:50:58.294041".to_string()),
        description: description.map(str::to_string),
        from: from.map(str::to_string),
        to: to.map(str::to_string),
        operation_amount: OperationAmount {
            amount: "31957.58".to_string(),
            currency: Currency {
                name: "руб.".to_string(),
                code: "RUB".to_string()
            }
        }
    }
}

fn render_to_string(shown: &[Transaction], available: Option<usize>) -> Result<String> {
    let mut renderer = ReportRenderer::new(Vec::new());
    renderer.write_transactions(shown, available)?;

    Ok(String::from_utf8(renderer.finish()?)?)
}

#[test]
fn test_render_transaction_masks_both_endpoints() {
    let transaction = create_transaction(
        Some("Перевод организации"),
        Some("Maestro 1596837868705199"),
        Some("Счет 64686473678894779589")
    );

    assert_eq!(render_transaction(&transaction), vec![
        "26.08.2019 Перевод организации",
        "Maestro 1596 83** **** 5199 -> Счет **9589",
        "Сумма: 31957.58 RUB"
    ]);
}

#[test]
fn test_render_transaction_hides_source_of_deposit_opening() {
    let transaction = create_transaction(
        Some("Открытие вклада"),
        Some("Maestro 1596837868705199"),
        Some("Счет 41421565395219882431")
    );

    assert_eq!(render_transaction(&transaction)[1], "Счет **2431");
}

#[test]
fn test_render_transaction_uses_placeholder_for_missing_endpoints() {
    let transaction = create_transaction(Some("Перевод организации"), None, None);

    assert_eq!(render_transaction(&transaction)[1], format!("{UNAVAILABLE} -> {UNAVAILABLE}"));
}

#[test]
fn test_render_transaction_uses_placeholder_for_unmaskable_endpoints() {
    let transaction = create_transaction(Some("Перевод"), Some("Visa 123"), Some("Счет 64686473678894779589"));

    assert_eq!(render_transaction(&transaction)[1], format!("{UNAVAILABLE} -> Счет **9589"));
}

#[test]
fn test_render_transaction_falls_back_on_bad_dates() {
    let mut transaction = create_transaction(None, None, None);
    transaction.date = Some("yesterday".to_string());

    assert_eq!(render_transaction(&transaction)[0], "yesterday ");

    transaction.date = None;

    assert_eq!(render_transaction(&transaction)[0], format!("{UNAVAILABLE} "));
}

#[test]
fn test_renderer_writes_summary_and_blocks() -> Result<()> {
    let transactions = vec![
        create_transaction(Some("Перевод организации"), Some("Счет 75106830613657916952"), Some("Счет 11776614605963066702")),
        create_transaction(Some("Открытие вклада"), None, Some("Счет 41421565395219882431"))
    ];

    let report = render_to_string(&transactions, Some(5))?;

    assert_eq!(report, concat!(
        "Выводится 2 транзакций из 5 доступных.\n",
        "\n",
        "26.08.2019 Перевод организации\n",
        "Счет **6952 -> Счет **6702\n",
        "Сумма: 31957.58 RUB\n",
        "\n",
        "26.08.2019 Открытие вклада\n",
        "Счет **2431\n",
        "Сумма: 31957.58 RUB\n",
        "\n"
    ));

    Ok(())
}

#[test]
fn test_renderer_reports_empty_selection() -> Result<()> {
    let report = render_to_string(&[], None)?;

    assert_eq!(report, "Не найдено ни одной транзакции, подходящей под ваши условия фильтрации.\n");

    Ok(())
}

#[test]
fn test_renderer_writes_counts_and_total() -> Result<()> {
    let transactions = vec![create_transaction(Some("Перевод организации"), None, None)];
    let counts = count_by_category(&transactions, &["Перевод", "Открытие"]);

    let mut renderer = ReportRenderer::new(Vec::new());
    renderer.write_category_counts(&counts)?;
    renderer.write_total_in_rub(1234.5)?;

    let output = String::from_utf8(renderer.finish()?)?;

    assert_eq!(output, "Перевод: 1\nОткрытие: 0\nИтого в рублях: 1234.50\n");

    Ok(())
}

#[test]
fn test_renderer_announces_all_transactions_without_limit() -> Result<()> {
    let transactions = vec![create_transaction(Some("Открытие вклада"), None, Some("Счет 41421565395219882431"))];
    let report = render_to_string(&transactions, None)?;

    assert!(report.starts_with("Выводятся все 1 транзакций.\n\n26.08.2019 Открытие вклада\n"));

    Ok(())
}
