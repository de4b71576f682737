//! Shortest-path reconstruction and inspection.

use knightpath_core::{MoveSet, Position};

use crate::search::arena::{NodeArena, NodeId};

/// An ordered sequence of squares from start to goal.
///
/// Always holds at least one square; a zero-move path is just the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnightPath {
    squares: Vec<Position>,
}

impl KnightPath {
    /// The zero-move path that stays on `square`.
    pub fn single(square: Position) -> Self {
        Self {
            squares: vec![square],
        }
    }

    /// Follow parent links from `goal` back to the root and reverse them.
    pub fn reconstruct(arena: &NodeArena, goal: NodeId) -> Self {
        let mut squares: Vec<Position> = arena.ancestry(goal).map(|n| n.position).collect();
        squares.reverse();
        Self { squares }
    }

    /// Number of moves (edges, not squares).
    #[inline]
    pub fn move_count(&self) -> usize {
        self.squares.len() - 1
    }

    /// Squares visited, start first.
    #[inline]
    pub fn squares(&self) -> &[Position] {
        &self.squares
    }

    /// The first square.
    pub fn start(&self) -> Position {
        self.squares[0]
    }

    /// The last square.
    pub fn goal(&self) -> Position {
        self.squares[self.squares.len() - 1]
    }

    /// Consecutive `(from, to)` pairs, one per move.
    pub fn moves(&self) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.squares.windows(2).map(|w| (w[0], w[1]))
    }

    /// Return `true` if every step is a single move from `moves`.
    pub fn is_legal_under(&self, moves: &MoveSet) -> bool {
        self.moves().all(|(from, to)| moves.contains(to - from))
    }
}
