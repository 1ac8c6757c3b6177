//! These structs provide the CLI interface for the cardspend CLI.

use crate::model::{TransactionEdits, TransactionInput};
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// The default transactions file, relative to the working directory.
pub const DEFAULT_FILE: &str = "transactions.csv";

/// cardspend: analyze and edit a CSV file of credit card transactions.
///
/// The file has the columns `date,category,amount,description`. If it does not exist it will be
/// created with just the header row.
///
/// Rows are referred to by their number as shown by `cardspend list`. Numbers shift when rows are
/// deleted, so list the rows again before editing or deleting another one.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show total spending by category and the minimum payment due (3% of total spending).
    Analyze,
    /// Show all transactions with their row numbers.
    List,
    /// Add a transaction to the end of the file.
    Add(AddArgs),
    /// Change fields of the transaction at a row number. Omitted fields keep their current value.
    Edit(EditArgs),
    /// Delete the transaction at a row number.
    Delete(DeleteArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The CSV file of transactions.
    #[arg(long, env = "CARDSPEND_FILE", default_value_t = DisplayPath::from(PathBuf::from(DEFAULT_FILE)))]
    file: DisplayPath,
}

impl Common {
    pub fn new(log_level: LevelFilter, file: PathBuf) -> Self {
        Self {
            log_level,
            file: file.into(),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn file(&self) -> &DisplayPath {
        &self.file
    }
}

/// Args for the `cardspend add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The date of the transaction, YYYY-MM-DD.
    #[arg(long)]
    date: String,

    /// The spending category, e.g. Food.
    #[arg(long)]
    category: String,

    /// The amount, e.g. 12.50. Negative amounts (refunds) are allowed.
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    /// A description of the transaction. Defaults to N/A.
    #[arg(long)]
    description: Option<String>,
}

impl AddArgs {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description,
        }
    }

    pub fn input(&self) -> TransactionInput {
        TransactionInput {
            date: self.date.clone(),
            category: self.category.clone(),
            amount: self.amount.clone(),
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

/// Args for the `cardspend edit` command.
#[derive(Debug, Parser, Clone)]
pub struct EditArgs {
    /// The row number of the transaction, as shown by `cardspend list`.
    ordinal: usize,

    /// The new date, YYYY-MM-DD.
    #[arg(long)]
    date: Option<String>,

    /// The new category.
    #[arg(long)]
    category: Option<String>,

    /// The new amount.
    #[arg(long, allow_hyphen_values = true)]
    amount: Option<String>,

    /// The new description.
    #[arg(long)]
    description: Option<String>,
}

impl EditArgs {
    pub fn new(ordinal: usize, edits: TransactionEdits) -> Self {
        Self {
            ordinal,
            date: edits.date,
            category: edits.category,
            amount: edits.amount,
            description: edits.description,
        }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn edits(&self) -> TransactionEdits {
        TransactionEdits {
            date: self.date.clone(),
            category: self.category.clone(),
            amount: self.amount.clone(),
            description: self.description.clone(),
        }
    }
}

/// Args for the `cardspend delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The row number of the transaction, as shown by `cardspend list`.
    ordinal: usize,
}

impl DeleteArgs {
    pub fn new(ordinal: usize) -> Self {
        Self { ordinal }
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
