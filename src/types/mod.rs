mod errors;
mod raw_row;
mod state;

pub use errors::QueryError;
pub use raw_row::RawRow;
pub use state::{SortOrder, TransactionState};
