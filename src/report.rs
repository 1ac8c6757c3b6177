//! The spending aggregator: totals by category and the minimum payment due.

use crate::error::{Error, ErrorType};
use crate::model::Transaction;
use crate::Result;
use anyhow::anyhow;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// The minimum payment due, as a percentage of total spending.
pub const MINIMUM_PAYMENT_PERCENT: i64 = 3;

/// `MINIMUM_PAYMENT_PERCENT` as a fraction, i.e. `0.03`.
pub fn minimum_payment_rate() -> Decimal {
    Decimal::new(MINIMUM_PAYMENT_PERCENT, 2)
}

/// The sum of the amounts of all transactions in one category.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryTotal {
    category: String,
    total: Decimal,
}

impl CategoryTotal {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn total(&self) -> Decimal {
        self.total
    }
}

/// A category total along with its share of total spending.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryShare {
    category: String,
    total: Decimal,
    percentage: Decimal,
}

impl CategoryShare {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Percent of total spending, e.g. `60` for 60%. Zero when total spending is zero.
    pub fn percentage(&self) -> Decimal {
        self.percentage
    }
}

/// The result of analyzing a set of transactions.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Report {
    total_spending: Decimal,
    minimum_payment: Decimal,
    /// In the order each category was first encountered.
    category_totals: Vec<CategoryTotal>,
    /// Sorted by total, largest first.
    breakdown: Vec<CategoryShare>,
    transactions: Vec<Transaction>,
}

impl Report {
    pub fn total_spending(&self) -> Decimal {
        self.total_spending
    }

    pub fn minimum_payment(&self) -> Decimal {
        self.minimum_payment
    }

    /// Category totals in the order each category was first encountered.
    pub fn category_totals(&self) -> &[CategoryTotal] {
        &self.category_totals
    }

    pub fn category_totals_map(&self) -> HashMap<String, Decimal> {
        self.category_totals
            .iter()
            .map(|c| (c.category.clone(), c.total))
            .collect()
    }

    /// The analyzed transactions, unchanged and in input order.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Categories sorted by total, largest first. Categories with equal totals stay in the order
    /// they were first encountered.
    pub fn breakdown(&self) -> &[CategoryShare] {
        &self.breakdown
    }
}

fn too_large(what: &str) -> Error {
    Error::new(ErrorType::Format, anyhow!("{what} is too large to compute"))
}

fn checked_sum(a: Decimal, b: Decimal, what: &str) -> Result<Decimal> {
    a.checked_add(b).ok_or_else(|| too_large(what))
}

fn percentage_of(amount: Decimal, total: Decimal) -> Result<Decimal> {
    if total.is_zero() {
        return Ok(Decimal::ZERO);
    }
    amount
        .checked_div(total)
        .and_then(|share| share.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| too_large("Category percentage"))
}

fn sorted_shares(category_totals: &[CategoryTotal], total: Decimal) -> Result<Vec<CategoryShare>> {
    let mut shares = category_totals
        .iter()
        .map(|c| {
            Ok(CategoryShare {
                category: c.category.clone(),
                total: c.total,
                percentage: percentage_of(c.total, total)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;
    // sort_by is stable
    shares.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(shares)
}

/// Groups `transactions` by category (ignoring surrounding whitespace) and computes the total
/// spending and the minimum payment due.
///
/// # Errors
///
/// `Format` if a sum or percentage does not fit in a `Decimal`. Sums are taken in input order, so
/// whether an intermediate sum overflows can depend on the order of the rows.
pub fn analyze(transactions: Vec<Transaction>) -> Result<Report> {
    let mut category_totals: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut total_spending = Decimal::ZERO;

    for transaction in &transactions {
        let category = transaction.category().trim();
        let amount = transaction.amount().value();
        match positions.get(category) {
            Some(&ix) => {
                let total = &mut category_totals[ix].total;
                *total = checked_sum(*total, amount, "Spending in one category")?;
            }
            None => {
                positions.insert(category.to_string(), category_totals.len());
                category_totals.push(CategoryTotal {
                    category: category.to_string(),
                    total: amount,
                });
            }
        }
        total_spending = checked_sum(total_spending, amount, "Total spending")?;
    }

    let minimum_payment = total_spending
        .checked_mul(minimum_payment_rate())
        .ok_or_else(|| too_large("Minimum payment"))?;
    let breakdown = sorted_shares(&category_totals, total_spending)?;
    debug!(
        "Analyzed {} transactions in {} categories, total spending {total_spending}",
        transactions.len(),
        category_totals.len()
    );

    Ok(Report {
        total_spending,
        minimum_payment,
        category_totals,
        breakdown,
        transactions,
    })
}
