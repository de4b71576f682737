//! Command-line front end for knightpath.

pub mod app;
pub mod command;
pub mod error;
pub mod report;

pub use app::{execute, run};
pub use command::{Command, Invocation, parse_args};
pub use error::CliError;
