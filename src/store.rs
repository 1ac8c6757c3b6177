//! The record store: the CSV file that holds every transaction.
//!
//! Every operation opens the file, does its work, and closes it before returning. Edits and
//! deletes are done by reading every row, changing the list in memory, and rewriting the whole
//! file with `write_all`.

use crate::error::{Error, ErrorType, IntoResult};
use crate::model::{Mapping, Transaction, TransactionColumn};
use crate::Result;
use anyhow::{anyhow, Context};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Read, append and rewrite access to a transactions file at a fixed path.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the file with only a header row if it does not exist. Returns `true` if the file
    /// was created.
    pub fn init(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        debug!("Creating {}", self.path.display());
        let file = File::create(&self.path)
            .with_context(|| format!("Unable to create file {}", self.path.display()))
            .pub_result(ErrorType::Io)?;
        let mut writer = csv::Writer::from_writer(file);
        self.write_rows(&mut writer, &[]).pub_result(ErrorType::Io)?;
        Ok(true)
    }

    /// Reads every row of the file, in file order.
    ///
    /// # Errors
    /// - `NotFound` if the file does not exist.
    /// - `Schema` if the header is missing one of `date`, `category` or `amount`.
    /// - `Format` if the amount of any row is not a number.
    /// - `Io` if the file cannot be read.
    pub fn read_all(&self) -> Result<Vec<Transaction>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::new(
                    ErrorType::NotFound,
                    anyhow!("File '{}' not found", self.path.display()),
                ))
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Unable to open {}", self.path.display()))
                    .pub_result(ErrorType::Io)
            }
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .with_context(|| format!("Unable to read the header of {}", self.path.display()))
            .pub_result(ErrorType::Io)?
            .clone();
        let mapping = Mapping::new(&headers)
            .with_context(|| format!("Bad header in {}", self.path.display()))
            .pub_result(ErrorType::Schema)?;
        trace!("Column mapping {mapping:?}");

        let mut rows = Vec::new();
        for (ix, record) in reader.records().enumerate() {
            let row_number = ix + 1;
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    let error_type = if e.is_io_error() {
                        ErrorType::Io
                    } else {
                        ErrorType::Format
                    };
                    return Err(e)
                        .with_context(|| format!("Unable to read row {row_number}"))
                        .pub_result(error_type);
                }
            };
            let transaction = mapping
                .transaction(&record)
                .with_context(|| format!("Invalid data format in row {row_number}"))
                .pub_result(ErrorType::Format)?;
            rows.push(transaction);
        }
        debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }

    /// Appends one row to the end of the file. The header is not rewritten and the transaction is
    /// not validated.
    pub fn append(&self, transaction: &Transaction) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Unable to open {} for appending", self.path.display()))
            .pub_result(ErrorType::Io)?;
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(transaction.to_record())
            .and_then(|_| writer.flush().map_err(csv::Error::from))
            .with_context(|| format!("Unable to append to {}", self.path.display()))
            .pub_result(ErrorType::Io)?;
        debug!("Appended a row to {}", self.path.display());
        Ok(())
    }

    /// Truncates the file and writes the header followed by `transactions`, in order.
    pub fn write_all(&self, transactions: &[Transaction]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Unable to open {} for writing", self.path.display()))
            .pub_result(ErrorType::Io)?;
        let mut writer = csv::Writer::from_writer(file);
        self.write_rows(&mut writer, transactions)
            .pub_result(ErrorType::Io)?;
        debug!(
            "Rewrote {} with {} rows",
            self.path.display(),
            transactions.len()
        );
        Ok(())
    }

    /// Returns the row at the 1-based `ordinal` of `transactions`, which should be the list most
    /// recently returned by `read_all`.
    pub fn locate(transactions: &[Transaction], ordinal: usize) -> Result<&Transaction> {
        let ix = index_of(transactions.len(), ordinal)?;
        Ok(&transactions[ix])
    }

    fn write_rows<W: Write>(
        &self,
        writer: &mut csv::Writer<W>,
        transactions: &[Transaction],
    ) -> anyhow::Result<()> {
        let path = self.path.display();
        writer
            .write_record(TransactionColumn::headers())
            .with_context(|| format!("Unable to write the header to {path}"))?;
        for transaction in transactions {
            writer
                .write_record(transaction.to_record())
                .with_context(|| format!("Unable to write a row to {path}"))?;
        }
        writer
            .flush()
            .with_context(|| format!("Unable to flush {path}"))
    }
}

/// Converts a 1-based ordinal into an index into a list of `len` rows.
fn index_of(len: usize, ordinal: usize) -> Result<usize> {
    if ordinal < 1 || ordinal > len {
        return Err(Error::new(
            ErrorType::Range,
            anyhow!("Invalid transaction number {ordinal}, expected a number from 1 to {len}"),
        ));
    }
    Ok(ordinal - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use crate::test::{sample_transactions, TestEnv};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn amount(s: &str) -> Amount {
        Amount::from_str(s).unwrap()
    }

    #[test]
    fn test_init_creates_header_only_file() {
        let env = TestEnv::empty();
        let store = env.store();
        assert!(!store.path().exists());
        assert!(store.init().unwrap());
        assert_eq!(
            env.contents(),
            "date,category,amount,description\n".to_string()
        );
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_init_leaves_existing_file() {
        let env = TestEnv::with_transactions(&sample_transactions());
        let before = env.contents();
        assert!(!env.store().init().unwrap());
        assert_eq!(env.contents(), before);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let env = TestEnv::new();
        let rows = vec![
            Transaction::new("2024-01-05", "Food", amount("500.00"), "Lunch, with \"friends\""),
            Transaction::new("2024-01-06", "Gifts", amount("-25.5"), "multi\nline"),
            Transaction::new("2024-01-07", "Travel", amount("1200"), ""),
        ];
        env.store().write_all(&rows).unwrap();
        let read = env.store().read_all().unwrap();
        assert_eq!(read, rows);
        assert_eq!(read[1].amount().to_string(), "-25.5");
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let env = TestEnv::empty();
        let err = env.store().read_all().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::NotFound);
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_read_missing_column_is_schema_error() {
        let env = TestEnv::with_contents("date,category,description\n2024-01-05,Food,Lunch\n");
        let err = env.store().read_all().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Schema);
        assert!(err.to_string().contains("amount"));
    }

    #[test]
    fn test_read_empty_file_is_schema_error() {
        let env = TestEnv::with_contents("");
        let err = env.store().read_all().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Schema);
    }

    #[test]
    fn test_read_bad_amount_is_format_error() {
        let env = TestEnv::with_contents(
            "date,category,amount,description\n\
             2024-01-05,Food,500.00,Lunch\n\
             2024-01-06,Food,abc,Dinner\n",
        );
        let err = env.store().read_all().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Format);
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn test_read_without_description_column() {
        let env = TestEnv::with_contents("date,category,amount\n2024-01-05,Food,5\n");
        let rows = env.store().read_all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description(), "N/A");
        assert_eq!(rows[0].amount().value(), Decimal::new(5, 0));
    }

    #[test]
    fn test_read_does_not_validate_dates() {
        let env = TestEnv::with_contents("date,category,amount,description\nsoon,Food,5,x\n");
        let rows = env.store().read_all().unwrap();
        assert_eq!(rows[0].date(), "soon");
    }

    #[test]
    fn test_append_adds_one_row_at_end() {
        let env = TestEnv::with_transactions(&sample_transactions());
        let before = env.store().read_all().unwrap();
        let new = Transaction::new("2024-01-08", "Fuel", amount("45.10"), "Petrol");
        env.store().append(&new).unwrap();

        let after = env.store().read_all().unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last().unwrap(), &new);
    }

    #[test]
    fn test_append_missing_file_is_io_error() {
        let env = TestEnv::empty();
        let new = Transaction::new("2024-01-08", "Fuel", amount("45.10"), "Petrol");
        let err = env.store().append(&new).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Io);
        assert!(!env.store().path().exists());
    }

    #[test]
    fn test_write_all_drops_extra_columns() {
        let env = TestEnv::with_contents("memo,date,category,amount\nhi,2024-01-05,Food,5\n");
        let rows = env.store().read_all().unwrap();
        env.store().write_all(&rows).unwrap();
        assert_eq!(
            env.contents(),
            "date,category,amount,description\n2024-01-05,Food,5,N/A\n"
        );
    }

    #[test]
    fn test_locate() {
        let rows = sample_transactions();
        assert_eq!(Store::locate(&rows, 1).unwrap(), &rows[0]);
        assert_eq!(Store::locate(&rows, 3).unwrap(), &rows[2]);
        for ordinal in [0, 4, usize::MAX] {
            let err = Store::locate(&rows, ordinal).unwrap_err();
            assert_eq!(err.error_type(), ErrorType::Range);
        }
    }

    #[test]
    fn test_locate_empty() {
        let err = Store::locate(&[], 1).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Range);
    }
}
