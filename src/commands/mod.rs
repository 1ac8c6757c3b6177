//! Command handlers for the cardspend CLI.
//!
//! This module contains implementations for all CLI subcommands.

mod add;
mod analyze;
mod delete;
mod edit;
mod list;

use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use add::add;
pub use analyze::analyze;
pub use delete::delete;
pub use edit::edit;
pub use list::list;

/// The output type for a command: a message to print for the user and, optionally, structured
/// data describing the outcome.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Print the message to stdout and the structured data (if it exists) as JSON to `debug!`.
    pub fn print(&self) {
        println!("{}", self.message);
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
    }
}

/// A one-line summary of a transaction for status messages.
pub(crate) fn summarize(t: &crate::model::Transaction) -> String {
    format!("{} - {} - {}", t.date(), t.category(), t.amount())
}
