//! Validation of transaction fields entered on the command line.

use crate::model::{Amount, Transaction, NO_DESCRIPTION};
use anyhow::{bail, Context};
use chrono::NaiveDate;
use std::str::FromStr;

/// The only accepted date format, e.g. `2024-01-05`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated transaction fields as entered by a user.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct TransactionInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl TransactionInput {
    /// Validates the fields and builds a `Transaction`:
    /// - `amount` must parse as a finite decimal
    /// - `date` must be `YYYY-MM-DD` and a real calendar date
    /// - `category` must not be blank
    ///
    /// Fields are trimmed. A blank description becomes `N/A`.
    pub fn validate(self) -> anyhow::Result<Transaction> {
        let amount_str = self.amount.trim();
        let amount = Amount::from_str(amount_str)
            .with_context(|| format!("Amount must be a valid number, got '{amount_str}'"))?;

        let date = self.date.trim();
        parse_date(date)?;

        let category = self.category.trim();
        if category.is_empty() {
            bail!("Category must not be empty");
        }

        let description = match self.description.trim() {
            "" => NO_DESCRIPTION,
            s => s,
        };

        Ok(Transaction::new(date, category, amount, description))
    }

    /// Replaces each field of `self` with the corresponding field of `edits` when that field is
    /// present and not blank.
    pub fn merge(mut self, edits: TransactionEdits) -> Self {
        fn keep_or_replace(current: &mut String, edit: Option<String>) {
            if let Some(value) = edit.filter(|v| !v.trim().is_empty()) {
                *current = value;
            }
        }
        keep_or_replace(&mut self.date, edits.date);
        keep_or_replace(&mut self.category, edits.category);
        keep_or_replace(&mut self.amount, edits.amount);
        keep_or_replace(&mut self.description, edits.description);
        self
    }
}

impl From<&Transaction> for TransactionInput {
    fn from(t: &Transaction) -> Self {
        Self {
            date: t.date().to_string(),
            category: t.category().to_string(),
            amount: t.amount().to_string(),
            description: t.description().to_string(),
        }
    }
}

/// Optional replacement values for an existing transaction. `None` keeps the current value.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct TransactionEdits {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<String>,
    pub description: Option<String>,
}

impl TransactionEdits {
    /// Applies the edits to `current`. The merged row must pass `TransactionInput::validate`, but
    /// only the edited fields are trimmed or defaulted; the rest are kept exactly as in `current`.
    pub fn apply(self, current: &Transaction) -> anyhow::Result<Transaction> {
        fn edited(field: &Option<String>) -> bool {
            field.as_deref().map_or(false, |v| !v.trim().is_empty())
        }
        let date = edited(&self.date);
        let category = edited(&self.category);
        let amount = edited(&self.amount);
        let description = edited(&self.description);

        let merged = TransactionInput::from(current).merge(self).validate()?;
        Ok(Transaction::new(
            if date { merged.date() } else { current.date() },
            if category {
                merged.category()
            } else {
                current.category()
            },
            if amount {
                merged.amount()
            } else {
                current.amount()
            },
            if description {
                merged.description()
            } else {
                current.description()
            },
        ))
    }
}

/// Parses a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    // chrono accepts unpadded months and days, so check the shape first.
    let shaped = s.len() == 10
        && s.char_indices().all(|(ix, c)| match ix {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });
    if !shaped {
        bail!("Date must be in YYYY-MM-DD format, got '{s}'");
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .with_context(|| format!("Date '{s}' is not a valid calendar date"))
}
