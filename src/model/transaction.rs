use crate::model::Amount;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The description used when a row has no description.
pub const NO_DESCRIPTION: &str = "N/A";

/// Represents a single row of the transactions file.
///
/// A transaction has no identifier. While listing, editing or deleting, a transaction is referred
/// to by its 1-based position in the most recent read of the file.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    date: String,
    category: String,
    amount: Amount,
    description: String,
}

impl Transaction {
    /// Creates a transaction without validating its fields. See `TransactionInput::validate` for
    /// the checks that are applied before a transaction is written by a command.
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The fields in the order they are written to the file.
    pub(crate) fn to_record(&self) -> [String; 4] {
        [
            self.date.clone(),
            self.category.clone(),
            self.amount.to_string(),
            self.description.clone(),
        ]
    }
}

/// Represents the columns of the transactions file, in the order they are written.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionColumn {
    Date,
    Category,
    Amount,
    Description,
}

serde_plain::derive_display_from_serialize!(TransactionColumn);
serde_plain::derive_fromstr_from_deserialize!(TransactionColumn);

impl TransactionColumn {
    pub const ALL: [TransactionColumn; 4] = [
        TransactionColumn::Date,
        TransactionColumn::Category,
        TransactionColumn::Amount,
        TransactionColumn::Description,
    ];

    /// The header row of the transactions file.
    pub fn headers() -> [String; 4] {
        Self::ALL.map(|c| c.to_string())
    }
}

/// Maps each known column to its index in a header row. The file may order its columns
/// differently or carry extra columns; only `description` may be absent.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) struct Mapping {
    date: usize,
    category: usize,
    amount: usize,
    description: Option<usize>,
}

impl Mapping {
    pub(crate) fn new<S, I>(headers: I) -> anyhow::Result<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut date = None;
        let mut category = None;
        let mut amount = None;
        let mut description = None;
        for (ix, header) in headers.into_iter().enumerate() {
            let slot = match TransactionColumn::from_str(header.as_ref().trim()) {
                Ok(TransactionColumn::Date) => &mut date,
                Ok(TransactionColumn::Category) => &mut category,
                Ok(TransactionColumn::Amount) => &mut amount,
                Ok(TransactionColumn::Description) => &mut description,
                Err(_) => continue,
            };
            if slot.is_some() {
                bail!("Duplicate column '{}' in the header", header.as_ref().trim());
            }
            *slot = Some(ix);
        }

        let required = |ix: Option<usize>, column: TransactionColumn| {
            ix.with_context(|| {
                format!(
                    "Missing required column '{column}'. Expected columns: {}",
                    TransactionColumn::headers().join(", ")
                )
            })
        };

        Ok(Self {
            date: required(date, TransactionColumn::Date)?,
            category: required(category, TransactionColumn::Category)?,
            amount: required(amount, TransactionColumn::Amount)?,
            description,
        })
    }

    /// Builds a `Transaction` from the fields of one data row. Fails only if the amount does not
    /// parse. Missing fields are read as empty, except a missing description which becomes
    /// `N/A`.
    pub(crate) fn transaction<'a, R>(&self, row: R) -> anyhow::Result<Transaction>
    where
        R: IntoIterator<Item = &'a str>,
    {
        let values: Vec<&str> = row.into_iter().collect();
        let field = |ix: usize| values.get(ix).copied().unwrap_or_default();

        let raw_amount = field(self.amount);
        let amount = Amount::from_str(raw_amount)
            .with_context(|| format!("Invalid amount '{raw_amount}'"))?;
        let description = match self.description.and_then(|ix| values.get(ix)) {
            Some(value) => value.to_string(),
            None => NO_DESCRIPTION.to_string(),
        };

        Ok(Transaction {
            date: field(self.date).to_string(),
            category: field(self.category).to_string(),
            amount,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_headers() {
        assert_eq!(
            TransactionColumn::headers(),
            ["date", "category", "amount", "description"]
        );
    }

    #[test]
    fn test_mapping_reordered_with_extra_column() {
        let mapping = Mapping::new(["amount", "memo", " date ", "category"]).unwrap();
        let t = mapping
            .transaction(["12.00", "x", "2024-02-01", "Food"])
            .unwrap();
        assert_eq!(t.date(), "2024-02-01");
        assert_eq!(t.category(), "Food");
        assert_eq!(t.amount().value(), Decimal::new(12, 0));
        assert_eq!(t.description(), NO_DESCRIPTION);
    }

    #[test]
    fn test_mapping_missing_column() {
        let err = Mapping::new(["date", "category", "description"]).unwrap_err();
        assert!(err.to_string().contains("Missing required column 'amount'"));
    }

    #[test]
    fn test_mapping_duplicate_column() {
        assert!(Mapping::new(["date", "date", "category", "amount"]).is_err());
    }

    #[test]
    fn test_short_row_defaults_description() {
        let mapping = Mapping::new(TransactionColumn::headers()).unwrap();
        let t = mapping
            .transaction(["2024-01-05", "Food", "500.00"])
            .unwrap();
        assert_eq!(t.description(), NO_DESCRIPTION);
    }

    #[test]
    fn test_empty_description_is_kept() {
        let mapping = Mapping::new(TransactionColumn::headers()).unwrap();
        let t = mapping
            .transaction(["2024-01-05", "Food", "500.00", ""])
            .unwrap();
        assert_eq!(t.description(), "");
    }

    #[test]
    fn test_bad_amount() {
        let mapping = Mapping::new(TransactionColumn::headers()).unwrap();
        let err = mapping
            .transaction(["2024-01-05", "Food", "lots", "Lunch"])
            .unwrap_err();
        assert!(err.to_string().contains("Invalid amount 'lots'"));
    }

    #[test]
    fn test_to_record() {
        let t = Transaction::new("2024-01-07", "Travel", "1200.00".parse().unwrap(), "Taxi");
        assert_eq!(t.to_record(), ["2024-01-07", "Travel", "1200.00", "Taxi"]);
    }
}
