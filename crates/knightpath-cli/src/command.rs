//! Command-line argument parsing.

use knightpath_core::{BoardBounds, MoveSet, Position};
use knightpath_search::SearchConfig;

use crate::error::CliError;

/// Squares used when no query is given: b2 to h8.
pub const DEFAULT_ROUTE: (Position, Position) = (Position::new(1, 1), Position::new(7, 7));

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<from> <to>` -- report one shortest path.
    Route {
        /// Starting square.
        from: Position,
        /// Target square.
        to: Position,
    },
    /// `table <from>` -- print the move count to every square.
    Distances {
        /// Square distances are measured from.
        from: Position,
    },
    /// `help` -- print usage.
    Help,
}

/// A command together with the search configuration its flags selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// What to do.
    pub command: Command,
    /// How to search.
    pub config: SearchConfig,
}

/// Parse arguments (program name excluded) into an [`Invocation`].
///
/// Flags may appear anywhere:
/// - `--king` moves like a king instead of a knight
/// - `--size N` uses an `N x N` board
/// - `--node-limit N` caps nodes per query
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, CliError> {
    let mut config = SearchConfig::default();
    let mut positional: Vec<&str> = Vec::new();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_ref() {
            "--king" => {
                config = config.with_moves(MoveSet::king());
                i += 1;
            }
            "--size" => {
                let n: u32 = parse_value(args.get(i + 1).map(|s| s.as_ref()), "--size")?;
                config = config.with_bounds(BoardBounds::square(n)?);
                i += 2;
            }
            "--node-limit" => {
                let n: usize =
                    parse_value(args.get(i + 1).map(|s| s.as_ref()), "--node-limit")?;
                config = config.with_node_limit(n);
                i += 2;
            }
            "-h" | "--help" => {
                positional.clear();
                positional.push("help");
                break;
            }
            flag if flag.starts_with("--") => {
                return Err(CliError::UnknownFlag {
                    flag: flag.to_string(),
                });
            }
            token => {
                positional.push(token);
                i += 1;
            }
        }
    }

    let command = match positional.as_slice() {
        [] => Command::Route {
            from: DEFAULT_ROUTE.0,
            to: DEFAULT_ROUTE.1,
        },
        ["help"] => Command::Help,
        ["table", from] => Command::Distances {
            from: from.parse()?,
        },
        [from, to] => Command::Route {
            from: from.parse()?,
            to: to.parse()?,
        },
        other => {
            return Err(CliError::Usage {
                found: other.join(" "),
            });
        }
    };

    Ok(Invocation { command, config })
}

/// Parse the value following a flag.
fn parse_value<T: std::str::FromStr>(token: Option<&str>, flag: &str) -> Result<T, CliError> {
    let value = token.ok_or_else(|| CliError::MissingValue {
        flag: flag.to_string(),
    })?;
    value.parse().map_err(|_| CliError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}
