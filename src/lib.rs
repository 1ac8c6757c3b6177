pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod report;
mod store;


pub use config::Config;
pub use error::{Error, ErrorType, Result};
pub use report::{analyze, Report};
pub use store::Store;
