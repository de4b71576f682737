//! Breadth-first shortest-path search over implicitly generated squares.

pub mod arena;
pub mod traversal;
pub mod visited;

use tracing::debug;

use knightpath_core::{BoardRules, Position};

use crate::config::SearchConfig;
use crate::distance::DistanceMap;
use crate::error::SearchError;
use crate::path::KnightPath;
use traversal::Traversal;

/// Answers shortest-path queries for one piece and board.
///
/// Holds no per-query state: every call builds and drops its own
/// [`Traversal`], so an engine can be reused freely.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    rules: BoardRules,
    node_limit: Option<usize>,
}

impl SearchEngine {
    /// Create an engine for the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            rules: config.rules(),
            node_limit: config.node_limit,
        }
    }

    /// The movement rules in use.
    pub fn rules(&self) -> &BoardRules {
        &self.rules
    }

    /// Find one shortest sequence of squares from `start` to `goal`.
    ///
    /// When several shortest paths exist, the one discovered first under the
    /// move set's fixed order is returned, so repeated calls agree.
    pub fn shortest_path(&self, start: Position, goal: Position) -> Result<KnightPath, SearchError> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;

        if start == goal {
            return Ok(KnightPath::single(start));
        }

        debug!(%start, %goal, "search started");
        let mut traversal = Traversal::new(&self.rules, self.node_limit, start)?;

        while let Some(current) = traversal.pop() {
            if traversal.arena()[current].position == goal {
                let path = KnightPath::reconstruct(traversal.arena(), current);
                debug!(
                    moves = path.move_count(),
                    nodes = traversal.arena().len(),
                    "goal reached"
                );
                return Ok(path);
            }
            traversal.expand(current)?;
        }

        debug!(nodes = traversal.arena().len(), "frontier exhausted");
        Err(SearchError::NotFound { start, goal })
    }

    /// Minimum move count from `start` to every reachable square.
    pub fn distances_from(&self, start: Position) -> Result<DistanceMap, SearchError> {
        self.check_bounds(start)?;

        let mut traversal = Traversal::new(&self.rules, self.node_limit, start)?;
        while let Some(current) = traversal.pop() {
            traversal.expand(current)?;
        }

        let arena = traversal.into_arena();
        debug!(%start, nodes = arena.len(), "distance table built");
        Ok(DistanceMap::from_arena(start, self.rules.bounds(), &arena))
    }

    fn check_bounds(&self, position: Position) -> Result<(), SearchError> {
        let bounds = self.rules.bounds();
        if bounds.contains(position) {
            Ok(())
        } else {
            Err(SearchError::InvalidPosition { position, bounds })
        }
    }
}

/// Shortest knight path on the standard 8x8 board.
pub fn shortest_path(start: Position, goal: Position) -> Result<KnightPath, SearchError> {
    SearchEngine::default().shortest_path(start, goal)
}

#[cfg(test)]
mod tests {
    use super::{SearchEngine, shortest_path};
    use crate::config::SearchConfig;
    use crate::error::SearchError;
    use knightpath_core::{BoardBounds, MoveOffset, MoveSet, Position};

    #[test]
    fn same_square_is_zero_moves() {
        let path = shortest_path(Position::new(3, 3), Position::new(3, 3)).unwrap();
        assert_eq!(path.move_count(), 0);
        assert_eq!(path.squares(), &[Position::new(3, 3)]);
    }

    #[test]
    fn known_move_counts() {
        let cases = [
            ((0, 0), (1, 2), 1),
            ((0, 0), (7, 7), 6),
            ((1, 1), (7, 7), 6),
            ((3, 3), (4, 3), 3),
            ((0, 0), (1, 1), 4),
        ];
        for ((sf, sr), (gf, gr), expected) in cases {
            let path = shortest_path(Position::new(sf, sr), Position::new(gf, gr)).unwrap();
            assert_eq!(path.move_count(), expected, "({sf},{sr}) -> ({gf},{gr})");
        }
    }

    #[test]
    fn path_from_b2_to_h8() {
        // First-discovered path under the fixed offset order.
        let path = shortest_path(Position::new(1, 1), Position::new(7, 7)).unwrap();
        assert_eq!(path.start(), Position::new(1, 1));
        assert_eq!(path.goal(), Position::new(7, 7));
        assert_eq!(path.squares().len(), 7);
        assert!(path.is_legal_under(&MoveSet::knight()));
    }

    #[test]
    fn out_of_bounds_rejected() {
        for bad in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(8, 3),
            Position::new(3, 8),
        ] {
            assert!(matches!(
                shortest_path(bad, Position::new(0, 0)),
                Err(SearchError::InvalidPosition { position, .. }) if position == bad
            ));
            assert!(matches!(
                shortest_path(Position::new(0, 0), bad),
                Err(SearchError::InvalidPosition { position, .. }) if position == bad
            ));
        }
    }

    #[test]
    fn unreachable_goal_is_not_found() {
        // A piece that only steps right can never go left.
        let engine = SearchEngine::new(
            SearchConfig::default().with_moves(MoveSet::new([MoveOffset::new(1, 0)])),
        );
        assert_eq!(
            engine.shortest_path(Position::new(4, 0), Position::new(0, 0)),
            Err(SearchError::NotFound {
                start: Position::new(4, 0),
                goal: Position::new(0, 0),
            })
        );
        assert_eq!(
            engine
                .shortest_path(Position::new(0, 0), Position::new(4, 0))
                .unwrap()
                .move_count(),
            4
        );
    }

    #[test]
    fn knight_on_three_by_three_never_reaches_center() {
        let engine = SearchEngine::new(
            SearchConfig::default().with_bounds(BoardBounds::square(3).unwrap()),
        );
        assert!(matches!(
            engine.shortest_path(Position::new(0, 0), Position::new(1, 1)),
            Err(SearchError::NotFound { .. })
        ));
        // The eight outer squares form one knight cycle.
        let map = engine.distances_from(Position::new(0, 0)).unwrap();
        assert_eq!(map.reachable(), 8);
        assert_eq!(map.get(Position::new(1, 1)), None);
    }

    #[test]
    fn king_on_larger_board() {
        let engine = SearchEngine::new(
            SearchConfig::default()
                .with_moves(MoveSet::king())
                .with_bounds(BoardBounds::square(20).unwrap()),
        );
        let path = engine
            .shortest_path(Position::new(0, 0), Position::new(19, 5))
            .unwrap();
        assert_eq!(path.move_count(), 19);
        assert!(path.is_legal_under(&MoveSet::king()));
    }

    #[test]
    fn node_limit_enforced() {
        let engine = SearchEngine::new(SearchConfig::default().with_node_limit(5));
        assert_eq!(
            engine.shortest_path(Position::new(0, 0), Position::new(7, 7)),
            Err(SearchError::NodeLimitExceeded { limit: 5 })
        );
        // A limit is not consulted for zero-move queries.
        assert!(
            engine
                .shortest_path(Position::new(0, 0), Position::new(0, 0))
                .is_ok()
        );
    }

    #[test]
    fn distances_from_corner() {
        let map = SearchEngine::default()
            .distances_from(Position::new(0, 0))
            .unwrap();
        assert_eq!(map.reachable(), 64);
        assert_eq!(map.get(Position::new(0, 0)), Some(0));
        assert_eq!(map.get(Position::new(7, 7)), Some(6));
        assert_eq!(map.eccentricity(), 6);
    }

    #[test]
    fn repeated_queries_agree() {
        let engine = SearchEngine::default();
        let a = engine.shortest_path(Position::new(2, 0), Position::new(5, 7)).unwrap();
        let b = engine.shortest_path(Position::new(2, 0), Position::new(5, 7)).unwrap();
        assert_eq!(a, b);
    }
}
