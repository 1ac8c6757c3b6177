//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::{summarize, Out};
use crate::model::Transaction;
use crate::store::Store;
use crate::{Config, Result};

/// Deletes the transaction at the 1-based row number in `args` by rewriting the file without it.
///
/// # Errors
///
/// - `Range` if the row number does not exist. Nothing is written in that case.
/// - `NotFound`, `Schema`, `Format` or `Io` from reading or rewriting the file.
pub fn delete(config: Config, args: DeleteArgs) -> Result<Out<Transaction>> {
    let store = config.store();
    let mut transactions = store.read_all()?;
    let ordinal = args.ordinal();

    Store::locate(&transactions, ordinal)?;
    let deleted = transactions.remove(ordinal - 1);
    store.write_all(&transactions)?;

    let message = format!("Deleted transaction {ordinal}: {}", summarize(&deleted));
    Ok(Out::new(message, deleted))
}
