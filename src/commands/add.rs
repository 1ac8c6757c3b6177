//! Add command handler.

use crate::args::AddArgs;
use crate::commands::{summarize, Out};
use crate::error::{ErrorType, IntoResult};
use crate::model::Transaction;
use crate::{Config, Result};

/// Validates a new transaction and appends it to the end of the file.
///
/// # Errors
///
/// - `Format` if the amount is not a number, the date is not a `YYYY-MM-DD` calendar date, or the
///   category is blank. Nothing is written in that case.
/// - `Io` if the file cannot be appended to.
pub fn add(config: Config, args: AddArgs) -> Result<Out<Transaction>> {
    let transaction = args.input().validate().pub_result(ErrorType::Format)?;
    config.store().append(&transaction)?;
    let message = format!("Added transaction: {}", summarize(&transaction));
    Ok(Out::new(message, transaction))
}
