//! Executes parsed commands against a search engine.

use tracing::{debug, info};

use knightpath_search::SearchEngine;

use crate::command::{Command, Invocation, parse_args};
use crate::error::CliError;
use crate::report::{format_distances, format_route, usage};

/// Parse `args` and run the resulting command, returning the text to print.
pub fn run<S: AsRef<str>>(args: &[S]) -> Result<String, CliError> {
    let invocation = parse_args(args)?;
    execute(invocation)
}

/// Run an already-parsed invocation.
pub fn execute(invocation: Invocation) -> Result<String, CliError> {
    let Invocation { command, config } = invocation;
    debug!(?command, bounds = %config.bounds, moves = config.moves.len(), "executing");
    let engine = SearchEngine::new(config);

    match command {
        Command::Route { from, to } => {
            let path = engine.shortest_path(from, to)?;
            info!(%from, %to, moves = path.move_count(), "route found");
            Ok(format_route(&path))
        }
        Command::Distances { from } => {
            let map = engine.distances_from(from)?;
            info!(%from, reachable = map.reachable(), "distance table built");
            Ok(format_distances(&map))
        }
        Command::Help => Ok(usage().to_string()),
    }
}
