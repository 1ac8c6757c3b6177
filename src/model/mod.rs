//! Types that represent the core data model, such as `Transaction` and `Amount`.
mod amount;
mod input;
mod transaction;

pub use amount::{Amount, AmountError};
pub use input::{parse_date, TransactionEdits, TransactionInput, DATE_FORMAT};
pub(crate) use transaction::Mapping;
pub use transaction::{Transaction, TransactionColumn, NO_DESCRIPTION};
