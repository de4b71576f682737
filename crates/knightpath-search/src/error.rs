//! Search errors.

use knightpath_core::{BoardBounds, Position};

/// Errors that can end a shortest-path or distance query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A start or goal square lies outside the configured board.
    #[error("position {position} is outside board bounds {bounds}")]
    InvalidPosition {
        /// The rejected square.
        position: Position,
        /// The bounds it was checked against.
        bounds: BoardBounds,
    },

    /// The goal is not reachable from the start under the configured moves.
    #[error("no path from {start} to {goal}")]
    NotFound {
        /// Where the search began.
        start: Position,
        /// The square that was never reached.
        goal: Position,
    },

    /// The traversal would have created more nodes than allowed.
    #[error("node limit of {limit} exceeded")]
    NodeLimitExceeded {
        /// The configured limit.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::SearchError;
    use knightpath_core::{BoardBounds, Position};

    #[test]
    fn invalid_position_display() {
        let err = SearchError::InvalidPosition {
            position: Position::new(8, 0),
            bounds: BoardBounds::STANDARD,
        };
        assert_eq!(
            format!("{err}"),
            "position (8,0) is outside board bounds [0, 7]"
        );
    }

    #[test]
    fn invalid_position_display_at_i32_max() {
        let err = SearchError::InvalidPosition {
            position: Position::new(0, i32::MAX),
            bounds: BoardBounds::STANDARD,
        };
        assert_eq!(
            format!("{err}"),
            format!("position (0,{}) is outside board bounds [0, 7]", i32::MAX)
        );
    }

    #[test]
    fn not_found_display() {
        let err = SearchError::NotFound {
            start: Position::new(0, 0),
            goal: Position::new(0, 1),
        };
        assert_eq!(format!("{err}"), "no path from a1 to a2");
    }
}
