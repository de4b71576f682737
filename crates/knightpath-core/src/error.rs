//! Error types for position parsing and board-bounds validation.

/// Errors that occur when parsing a [`Position`](crate::Position) from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePositionError {
    /// The input was empty.
    #[error("empty square")]
    Empty,
    /// The file letter is not in `a`..`z`.
    #[error("invalid file: '{found}'")]
    BadFile {
        /// The offending character.
        found: char,
    },
    /// The rank is not a positive integer.
    #[error("invalid rank: \"{found}\"")]
    BadRank {
        /// The rank text that failed to parse.
        found: String,
    },
    /// A `file,rank` pair could not be parsed.
    #[error("invalid coordinate pair: \"{found}\"")]
    BadPair {
        /// The full input.
        found: String,
    },
}

/// Errors from constructing [`BoardBounds`](crate::BoardBounds).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// `min` is greater than `max`.
    #[error("board bounds inverted: min {min} > max {max}")]
    Inverted {
        /// Requested minimum coordinate.
        min: i32,
        /// Requested maximum coordinate.
        max: i32,
    },
    /// A board with no squares was requested.
    #[error("board must have at least one square per side")]
    Empty,
    /// The side length exceeds the supported maximum.
    #[error("board side {side} exceeds limit {limit}")]
    TooLarge {
        /// Requested side length.
        side: u64,
        /// Supported maximum.
        limit: u32,
    },
}
