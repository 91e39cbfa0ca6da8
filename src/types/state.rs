use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::types::QueryError;

/// The operation states a state filter can select.
///
/// Records may carry any state text; only these three can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionState {
    Executed,
    Canceled,
    Pending
}

impl TransactionState {
    pub const ALL: [TransactionState; 3] = [
        TransactionState::Executed,
        TransactionState::Canceled,
        TransactionState::Pending
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionState::Executed => "EXECUTED",
            TransactionState::Canceled => "CANCELED",
            TransactionState::Pending => "PENDING"
        }
    }
}

impl Display for TransactionState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for TransactionState {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim().to_uppercase();

        TransactionState::ALL.into_iter()
            .find(|state| state.as_str() == value)
            .ok_or_else(|| QueryError::InvalidArgument(format!(
                "Unknown state '{value}', expected one of EXECUTED, CANCELED, PENDING"
            )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending
}

impl SortOrder {
    pub fn is_descending(&self) -> bool {
        *self == SortOrder::Descending
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(QueryError::InvalidArgument(format!(
                "Unknown sort order '{other}', expected asc or desc"
            )))
        }
    }
}
