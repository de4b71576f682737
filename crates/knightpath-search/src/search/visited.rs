//! Discovered-square tracking keyed by the board's dense square index.

use knightpath_core::{BoardBounds, Position};

/// Bitset of squares already discovered in the current traversal.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    bounds: BoardBounds,
    words: Vec<u64>,
    len: usize,
}

impl VisitedSet {
    /// Create an empty set covering every square in `bounds`.
    pub fn new(bounds: BoardBounds) -> Self {
        Self {
            bounds,
            words: vec![0; bounds.square_count().div_ceil(64)],
            len: 0,
        }
    }

    /// Mark `pos` as discovered.
    ///
    /// Returns `true` if it was not already marked. Squares outside the
    /// bounds are never inserted.
    pub fn insert(&mut self, pos: Position) -> bool {
        let Some(index) = self.bounds.index_of(pos) else {
            return false;
        };
        let (word, bit) = (index / 64, 1u64 << (index % 64));
        if self.words[word] & bit != 0 {
            return false;
        }
        self.words[word] |= bit;
        self.len += 1;
        true
    }

    /// Return `true` if `pos` has been discovered.
    pub fn contains(&self, pos: Position) -> bool {
        self.bounds
            .index_of(pos)
            .is_some_and(|index| self.words[index / 64] & (1u64 << (index % 64)) != 0)
    }

    /// Number of discovered squares.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if nothing has been discovered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
