use crate::types::TransactionState;

/// The canonical, format-independent shape of a single bank operation.
///
/// Every field that an input source may omit is an `Option`, so a missing value stays
/// distinguishable from an empty one. A `Transaction` is built once by the normalizer
/// and never modified afterwards; query stages produce new sequences instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// Opaque identifier, only ever compared.
    pub id: Option<String>,
    /// Operation state, usually one of EXECUTED, CANCELED or PENDING.
    pub state: Option<String>,
    /// Timestamp in the `YYYY-MM-DDTHH:MM:SS.ffffff` form, ordered lexically.
    pub date: Option<String>,
    pub description: Option<String>,
    /// Source account or card, e.g. `Счет 64686473678894779589` or `Maestro 1596837868705199`.
    pub from: Option<String>,
    /// Destination account or card.
    pub to: Option<String>,
    pub operation_amount: OperationAmount
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationAmount {
    /// Decimal amount kept as text; it is not parsed during normalization.
    pub amount: String,
    pub currency: Currency
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    pub code: String
}

impl Transaction {
    pub fn has_state(&self, state: TransactionState) -> bool {
        self.state.as_deref() == Some(state.as_str())
    }

    pub fn currency_code(&self) -> &str {
        &self.operation_amount.currency.code
    }

    pub fn amount(&self) -> &str {
        &self.operation_amount.amount
    }

    /// Whether the operation opens a deposit, for which the source endpoint is not shown.
    pub fn is_deposit_opening(&self) -> bool {
        self.description.as_deref()
            .is_some_and(|description| description.to_lowercase().contains("открытие"))
    }
}
