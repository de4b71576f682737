//! Piece displacements and the ordered move sets built from them.

use std::fmt;

/// A single `(dx, dy)` displacement a piece may make in one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveOffset {
    /// Change in file.
    pub dx: i32,
    /// Change in rank.
    pub dy: i32,
}

impl MoveOffset {
    /// Create an offset from a file and rank delta.
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> MoveOffset {
        MoveOffset { dx, dy }
    }
}

impl fmt::Display for MoveOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+},{:+})", self.dx, self.dy)
    }
}

/// The 8 knight jumps, in expansion order.
///
/// The order decides which shortest path is reported when several exist.
pub const KNIGHT_OFFSETS: [MoveOffset; 8] = [
    MoveOffset::new(-2, 1),
    MoveOffset::new(-1, 2),
    MoveOffset::new(1, 2),
    MoveOffset::new(2, 1),
    MoveOffset::new(-2, -1),
    MoveOffset::new(-1, -2),
    MoveOffset::new(1, -2),
    MoveOffset::new(2, -1),
];

/// The 8 king steps.
pub const KING_OFFSETS: [MoveOffset; 8] = [
    MoveOffset::new(-1, -1),
    MoveOffset::new(-1, 0),
    MoveOffset::new(-1, 1),
    MoveOffset::new(0, -1),
    MoveOffset::new(0, 1),
    MoveOffset::new(1, -1),
    MoveOffset::new(1, 0),
    MoveOffset::new(1, 1),
];

/// An ordered, duplicate-free set of offsets describing how a piece moves.
///
/// Iteration order is the construction order and never changes, so any
/// search driven by a `MoveSet` expands neighbours reproducibly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveSet {
    offsets: Vec<MoveOffset>,
}

impl MoveSet {
    /// Build a move set, dropping repeated offsets (first occurrence wins).
    pub fn new(offsets: impl IntoIterator<Item = MoveOffset>) -> MoveSet {
        let mut out: Vec<MoveOffset> = Vec::new();
        for offset in offsets {
            if !out.contains(&offset) {
                out.push(offset);
            }
        }
        MoveSet { offsets: out }
    }

    /// Standard chess knight movement.
    pub fn knight() -> MoveSet {
        MoveSet::new(KNIGHT_OFFSETS)
    }

    /// Standard chess king movement.
    pub fn king() -> MoveSet {
        MoveSet::new(KING_OFFSETS)
    }

    /// Return `true` if `offset` is one of this set's displacements.
    #[inline]
    pub fn contains(&self, offset: MoveOffset) -> bool {
        self.offsets.contains(&offset)
    }

    /// Iterate over the offsets in expansion order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = MoveOffset> + '_ {
        self.offsets.iter().copied()
    }

    /// Number of distinct offsets.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Return `true` if the set has no offsets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        MoveSet::knight()
    }
}
