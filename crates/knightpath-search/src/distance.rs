//! Single-source move-count tables.

use knightpath_core::{BoardBounds, Position};

use crate::search::arena::NodeArena;

/// Minimum move count from one start square to every square on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    start: Position,
    bounds: BoardBounds,
    distances: Vec<Option<u32>>,
}

impl DistanceMap {
    /// Build the table from a fully drained traversal's nodes.
    pub(crate) fn from_arena(start: Position, bounds: BoardBounds, arena: &NodeArena) -> Self {
        let mut distances = vec![None; bounds.square_count()];
        for node in arena.iter() {
            if let Some(index) = bounds.index_of(node.position) {
                distances[index] = Some(node.depth);
            }
        }
        Self {
            start,
            bounds,
            distances,
        }
    }

    /// The square distances are measured from.
    pub fn start(&self) -> Position {
        self.start
    }

    /// The board the table covers.
    pub fn bounds(&self) -> BoardBounds {
        self.bounds
    }

    /// Moves needed to reach `pos`, or `None` if it is unreachable or off the board.
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.bounds.index_of(pos).and_then(|i| self.distances[i])
    }

    /// Number of reachable squares, the start included.
    pub fn reachable(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Largest finite distance from the start.
    pub fn eccentricity(&self) -> u32 {
        self.distances.iter().flatten().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::DistanceMap;
    use crate::search::arena::NodeArena;
    use knightpath_core::{BoardBounds, Position};

    #[test]
    fn built_from_arena() {
        let mut arena = NodeArena::default();
        let root = arena.push_root(Position::new(0, 0));
        arena.push_child(Position::new(1, 2), root);
        let map = DistanceMap::from_arena(Position::new(0, 0), BoardBounds::STANDARD, &arena);
        assert_eq!(map.get(Position::new(0, 0)), Some(0));
        assert_eq!(map.get(Position::new(1, 2)), Some(1));
        assert_eq!(map.get(Position::new(5, 5)), None);
        assert_eq!(map.get(Position::new(9, 9)), None);
        assert_eq!(map.reachable(), 2);
        assert_eq!(map.eccentricity(), 1);
    }
}
