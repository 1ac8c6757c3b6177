//! Configuration of the app.
//!
//! The only setting is the path of the transactions file, which comes from `--file` or
//! `$CARDSPEND_FILE` and defaults to `transactions.csv` in the working directory.

use crate::model::TransactionColumn;
use crate::store::Store;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// The `Config` object is handed to each command. It owns the `Store` for the transactions file.
#[derive(Debug, Clone)]
pub struct Config {
    data_file: PathBuf,
    store: Store,
}

impl Config {
    /// Creates a `Config` without touching the file system.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        let data_file = data_file.into();
        Self {
            store: Store::new(&data_file),
            data_file,
        }
    }

    /// Creates a `Config` and, if the transactions file does not exist, creates it with only a
    /// header row.
    ///
    /// # Errors
    /// - Returns an `Io` error if the file needed to be created and could not be.
    pub fn load(data_file: impl Into<PathBuf>) -> Result<Self> {
        let config = Self::new(data_file);
        if config.store.init()? {
            info!(
                "Created new file {} with headers: {}",
                config.data_file.display(),
                TransactionColumn::headers().join(", ")
            );
        }
        Ok(config)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn store(&self) -> &Store {
        &self.store
    }
}
