//! Plain-text rendering of search results.

use std::fmt::Write;

use knightpath_core::Position;
use knightpath_search::{DistanceMap, KnightPath};

/// Render a path as a move count followed by the squares visited.
pub fn format_route(path: &KnightPath) -> String {
    let squares: Vec<String> = path.squares().iter().map(Position::to_string).collect();
    let noun = if path.move_count() == 1 { "move" } else { "moves" };
    format!(
        "You made it in {} {noun}! Your path:\n{}",
        path.move_count(),
        squares.join(" -> ")
    )
}

/// Render a distance table as a grid, highest rank first.
///
/// Each cell holds the move count from the table's start square; `.` marks
/// squares the piece can never reach.
pub fn format_distances(map: &DistanceMap) -> String {
    let bounds = map.bounds();
    let width = map.eccentricity().to_string().len().max(1);
    let mut out = String::new();
    let _ = writeln!(out, "Moves from {}:", map.start());

    for rank in (bounds.min()..=bounds.max()).rev() {
        let cells: Vec<String> = (bounds.min()..=bounds.max())
            .map(|file| match map.get(Position::new(file, rank)) {
                Some(d) => format!("{d:>width$}"),
                None => format!("{:>width$}", "."),
            })
            .collect();
        let _ = writeln!(out, "{}", cells.join(" "));
    }

    let _ = write!(
        out,
        "{} of {} squares reachable, farthest {} moves",
        map.reachable(),
        bounds.square_count(),
        map.eccentricity()
    );
    out
}

/// Usage text for `help`.
pub fn usage() -> &'static str {
    "usage: knightpath [FLAGS] <from> <to>\n       \
     knightpath [FLAGS] table <from>\n\n\
     Squares are algebraic (b2) or file,rank pairs (1,1).\n\n\
     flags:\n  \
     --king            move like a king instead of a knight\n  \
     --size N          use an N x N board (default 8)\n  \
     --node-limit N    stop after creating N search nodes"
}

#[cfg(test)]
mod tests {
    use super::{format_distances, format_route};
    use knightpath_core::{BoardBounds, Position};
    use knightpath_search::{SearchConfig, SearchEngine, shortest_path};

    #[test]
    fn route_output() {
        let path = shortest_path(Position::new(0, 0), Position::new(1, 2)).unwrap();
        assert_eq!(
            format_route(&path),
            "You made it in 1 move! Your path:\na1 -> b3"
        );
    }

    #[test]
    fn zero_move_route() {
        let path = shortest_path(Position::new(3, 3), Position::new(3, 3)).unwrap();
        assert_eq!(format_route(&path), "You made it in 0 moves! Your path:\nd4");
    }

    #[test]
    fn distance_grid_on_small_board() {
        let engine = SearchEngine::new(
            SearchConfig::default().with_bounds(BoardBounds::square(3).unwrap()),
        );
        let map = engine.distances_from(Position::new(0, 0)).unwrap();
        let text = format_distances(&map);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Moves from a1:");
        assert_eq!(lines[1], "2 1 4");
        assert_eq!(lines[2], "3 . 1");
        assert_eq!(lines[3], "0 3 2");
        assert_eq!(lines[4], "8 of 9 squares reachable, farthest 4 moves");
    }
}
