//! Square board extents and the dense square encoding used by searches.

use std::fmt;

use crate::error::BoundsError;
use crate::position::Position;

/// Inclusive `[min, max]` extent shared by files and ranks.
///
/// Squares inside the bounds are numbered densely as
/// `index = (rank - min) * side + (file - min)`, so the standard board maps
/// a1 = 0, b1 = 1, ..., h8 = 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardBounds {
    min: i32,
    max: i32,
}

impl BoardBounds {
    /// The standard 8x8 chess board.
    pub const STANDARD: BoardBounds = BoardBounds { min: 0, max: 7 };

    /// Largest supported side length.
    pub const MAX_SIDE: u32 = 4096;

    /// Create bounds covering `min..=max` on both axes.
    pub fn new(min: i32, max: i32) -> Result<BoardBounds, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        let side = (max as i64 - min as i64 + 1) as u64;
        if side > Self::MAX_SIDE as u64 {
            return Err(BoundsError::TooLarge {
                side,
                limit: Self::MAX_SIDE,
            });
        }
        Ok(BoardBounds { min, max })
    }

    /// Bounds for an `n x n` board with coordinates `0..n`.
    pub fn square(n: u32) -> Result<BoardBounds, BoundsError> {
        if n == 0 {
            return Err(BoundsError::Empty);
        }
        if n > Self::MAX_SIDE {
            return Err(BoundsError::TooLarge {
                side: n as u64,
                limit: Self::MAX_SIDE,
            });
        }
        BoardBounds::new(0, n as i32 - 1)
    }

    /// Smallest valid coordinate.
    #[inline]
    pub const fn min(self) -> i32 {
        self.min
    }

    /// Largest valid coordinate.
    #[inline]
    pub const fn max(self) -> i32 {
        self.max
    }

    /// Number of files (equal to the number of ranks).
    #[inline]
    pub const fn side(self) -> usize {
        (self.max - self.min + 1) as usize
    }

    /// Total number of squares.
    #[inline]
    pub const fn square_count(self) -> usize {
        self.side() * self.side()
    }

    /// Return `true` if both coordinates of `pos` lie in `[min, max]`.
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.file >= self.min && pos.file <= self.max && pos.rank >= self.min && pos.rank <= self.max
    }

    /// Dense index of `pos`, or `None` if it lies outside the bounds.
    #[inline]
    pub const fn index_of(self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        let file = (pos.file - self.min) as usize;
        let rank = (pos.rank - self.min) as usize;
        Some(rank * self.side() + file)
    }

    /// Inverse of [`index_of`](Self::index_of).
    pub const fn position_at(self, index: usize) -> Option<Position> {
        if index >= self.square_count() {
            return None;
        }
        let side = self.side();
        Some(Position::new(
            self.min + (index % side) as i32,
            self.min + (index / side) as i32,
        ))
    }

    /// Iterate over every square in index order.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let (min, max) = (self.min, self.max);
        (min..=max).flat_map(move |rank| (min..=max).map(move |file| Position::new(file, rank)))
    }
}

impl Default for BoardBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for BoardBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
