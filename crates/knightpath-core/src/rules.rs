//! Legal destination generation for a single piece on an empty board.

use crate::bounds::BoardBounds;
use crate::offset::MoveSet;
use crate::position::Position;

/// Movement rules: which offsets a piece may use and where the board ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardRules {
    moves: MoveSet,
    bounds: BoardBounds,
}

impl BoardRules {
    /// Create rules from a move set and board bounds.
    pub fn new(moves: MoveSet, bounds: BoardBounds) -> BoardRules {
        BoardRules { moves, bounds }
    }

    /// Knight moves on the standard 8x8 board.
    pub fn knight() -> BoardRules {
        BoardRules::default()
    }

    /// The offsets used to generate destinations.
    #[inline]
    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The board extent destinations are clipped to.
    #[inline]
    pub fn bounds(&self) -> BoardBounds {
        self.bounds
    }

    /// Every in-bounds square reachable from `from` in one move.
    ///
    /// Results follow the move set's order and contain no duplicates.
    /// Offsets whose candidate overflows `i32` are skipped as off the board.
    ///
    /// The duplicate check never fires for a [`MoveSet`], whose offsets are
    /// already distinct and so land on distinct squares.
    pub fn destinations(&self, from: Position) -> Vec<Position> {
        let mut out = Vec::with_capacity(self.moves.len());
        for offset in self.moves.iter() {
            let Some(candidate) = from.checked_offset(offset) else {
                continue;
            };
            if self.bounds.contains(candidate) && !out.contains(&candidate) {
                out.push(candidate);
            }
        }
        out
    }
}
