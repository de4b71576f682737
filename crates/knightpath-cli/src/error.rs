//! Command-line errors.

use knightpath_core::{BoundsError, ParsePositionError};
use knightpath_search::SearchError;

/// Errors that can occur while parsing arguments or running a query.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The positional arguments match no known command.
    #[error("unrecognized arguments: \"{found}\" (try `help`)")]
    Usage {
        /// The positional arguments as given.
        found: String,
    },

    /// An unknown `--flag` was given.
    #[error("unknown flag: {flag}")]
    UnknownFlag {
        /// The flag as given.
        flag: String,
    },

    /// A flag that takes a value was last on the line.
    #[error("missing value for {flag}")]
    MissingValue {
        /// The flag missing its value.
        flag: String,
    },

    /// A flag's value could not be parsed.
    #[error("invalid value for {flag}: {value}")]
    InvalidValue {
        /// The flag.
        flag: String,
        /// The value that failed to parse.
        value: String,
    },

    /// A square could not be parsed.
    #[error("invalid square: {0}")]
    Position(#[from] ParsePositionError),

    /// The requested board size is not usable.
    #[error("invalid board: {0}")]
    Bounds(#[from] BoundsError),

    /// The search itself failed.
    #[error(transparent)]
    Search(#[from] SearchError),
}
