//! List command handler.

use crate::commands::analyze::money;
use crate::commands::Out;
use crate::model::Transaction;
use crate::{Config, Result};

const WIDTH: usize = 80;

/// Lists every transaction with its row number. The row numbers are the ordinals accepted by
/// `edit` and `delete`.
pub fn list(config: Config) -> Result<Out<Vec<Transaction>>> {
    let transactions = config.store().read_all()?;
    if transactions.is_empty() {
        return Ok(Out::new("No transactions found in the file.", transactions));
    }
    let message = render(&transactions);
    Ok(Out::new(message, transactions))
}

fn render(transactions: &[Transaction]) -> String {
    let heavy = "=".repeat(WIDTH);
    let mut lines = vec![
        heavy.clone(),
        "ALL TRANSACTIONS".to_string(),
        heavy.clone(),
        format!(
            "{:<4} {:<12} {:<20} {:<12} {}",
            "#", "Date", "Category", "Amount", "Description"
        ),
        "-".repeat(WIDTH),
    ];
    for (ix, t) in transactions.iter().enumerate() {
        lines.push(format!(
            "{:<4} {:<12} {:<20} {:<12} {}",
            ix + 1,
            t.date(),
            t.category(),
            money(t.amount().value()),
            t.description()
        ));
    }
    lines.push(heavy);
    lines.join("\n")
}
