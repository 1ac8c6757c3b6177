//! Public error types.
//!
//! Internally the crate uses `anyhow` for context-rich errors. At the boundary of the record store
//! and the command handlers, errors are tagged with an `ErrorType` so that callers can tell a
//! missing file from a bad row from an out-of-range ordinal without inspecting message text.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// The `Result` type returned by public functions in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The closed set of failure categories.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The transactions file does not exist.
    NotFound,
    /// The header row is missing a required column.
    Schema,
    /// A field could not be parsed: a numeric amount, a calendar date, or a blank category.
    Format,
    /// An ordinal does not refer to a row in the most recent read.
    Range,
    /// Reading or writing the file failed.
    Io,
}

serde_plain::derive_display_from_serialize!(ErrorType);
serde_plain::derive_fromstr_from_deserialize!(ErrorType);

/// An error with its `ErrorType` and the underlying chain of causes.
pub struct Error {
    error_type: ErrorType,
    inner: anyhow::Error,
}

impl Error {
    pub fn new(error_type: ErrorType, inner: impl Into<anyhow::Error>) -> Self {
        Self {
            error_type,
            inner: inner.into(),
        }
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The alternate form prints the whole context chain on one line.
        write!(f, "{:#}", self.inner)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {:?}", self.error_type, self.inner)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        let source: &(dyn std::error::Error + 'static) = self.inner.as_ref();
        Some(source)
    }
}

/// Converts an internal result into a public `Result` tagged with an `ErrorType`.
pub(crate) trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| Error::new(error_type, e))
    }
}
