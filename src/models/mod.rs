mod transaction;

pub use transaction::{Currency, OperationAmount, Transaction};
