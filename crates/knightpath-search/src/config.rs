//! Search configuration.

use knightpath_core::{BoardBounds, BoardRules, MoveSet};

/// Knobs for a [`SearchEngine`](crate::SearchEngine).
///
/// The default is a chess knight on the standard 8x8 board with no node
/// limit. Large boards should set a limit to cap memory use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Offsets the piece may move by.
    pub moves: MoveSet,
    /// Board extent.
    pub bounds: BoardBounds,
    /// Maximum number of search nodes a single query may create.
    pub node_limit: Option<usize>,
}

impl SearchConfig {
    /// Replace the move set.
    pub fn with_moves(mut self, moves: MoveSet) -> Self {
        self.moves = moves;
        self
    }

    /// Replace the board bounds.
    pub fn with_bounds(mut self, bounds: BoardBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Cap the number of nodes a query may create.
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Movement rules described by this configuration.
    pub fn rules(&self) -> BoardRules {
        BoardRules::new(self.moves.clone(), self.bounds)
    }
}
