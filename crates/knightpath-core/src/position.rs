//! Board squares as `(file, rank)` coordinate pairs.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::ParsePositionError;
use crate::offset::MoveOffset;

/// A square on the board, addressed by zero-based file (column) and rank (row).
///
/// Positions are plain values: two positions denote the same square iff both
/// coordinates match. A `Position` carries no bounds of its own; see
/// [`BoardBounds`](crate::BoardBounds) for validation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based file (0 = `a`).
    pub file: i32,
    /// Zero-based rank (0 = rank 1).
    pub rank: i32,
}

impl Position {
    /// Create a position from a file and rank.
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Position {
        Position { file, rank }
    }

    /// Parse algebraic notation such as `"e4"` or `"b12"`.
    ///
    /// Files run `a`..`z`; ranks are one-based. Bounds are not checked here.
    pub fn from_algebraic(s: &str) -> Result<Position, ParsePositionError> {
        let mut chars = s.chars();
        let file_char = chars.next().ok_or(ParsePositionError::Empty)?;
        if !file_char.is_ascii_lowercase() {
            return Err(ParsePositionError::BadFile {
                found: file_char,
            });
        }

        let rank_str = chars.as_str();
        let rank = rank_str
            .parse::<i32>()
            .ok()
            .filter(|r| *r >= 1)
            .ok_or_else(|| ParsePositionError::BadRank {
                found: rank_str.to_string(),
            })?;

        Ok(Position::new((file_char as u8 - b'a') as i32, rank - 1))
    }

    /// Parse a coordinate pair such as `"1,1"` or `"(7, 7)"`.
    pub fn from_pair(s: &str) -> Result<Position, ParsePositionError> {
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let bad = || ParsePositionError::BadPair {
            found: s.to_string(),
        };

        let (file, rank) = inner.split_once(',').ok_or_else(bad)?;
        let file = file.trim().parse().map_err(|_| bad())?;
        let rank = rank.trim().parse().map_err(|_| bad())?;
        Ok(Position::new(file, rank))
    }

    /// Apply `offset`, or `None` if either coordinate overflows `i32`.
    ///
    /// An overflowing candidate can never lie on a board, so callers may
    /// treat `None` as "off the board".
    #[inline]
    pub const fn checked_offset(self, offset: MoveOffset) -> Option<Position> {
        match (self.file.checked_add(offset.dx), self.rank.checked_add(offset.dy)) {
            (Some(file), Some(rank)) => Some(Position::new(file, rank)),
            _ => None,
        }
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParsePositionError::Empty);
        }
        if s.contains(',') {
            Position::from_pair(s)
        } else {
            Position::from_algebraic(s)
        }
    }
}

impl Add<MoveOffset> for Position {
    type Output = Position;

    #[inline]
    fn add(self, rhs: MoveOffset) -> Position {
        Position::new(self.file + rhs.dx, self.rank + rhs.dy)
    }
}

impl Sub for Position {
    type Output = MoveOffset;

    #[inline]
    fn sub(self, rhs: Position) -> MoveOffset {
        MoveOffset::new(self.file - rhs.file, self.rank - rhs.rank)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank.checked_add(1) {
            Some(rank) if (0..26).contains(&self.file) && self.rank >= 0 => {
                let c = (b'a' + self.file as u8) as char;
                write!(f, "{c}{rank}")
            }
            _ => write!(f, "({},{})", self.file, self.rank),
        }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}
