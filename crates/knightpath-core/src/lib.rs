//! Core board types: positions, move offsets, board bounds, and movement rules.

mod bounds;
mod error;
mod offset;
mod position;
mod rules;

pub use bounds::BoardBounds;
pub use error::{BoundsError, ParsePositionError};
pub use offset::{KING_OFFSETS, KNIGHT_OFFSETS, MoveOffset, MoveSet};
pub use position::Position;
pub use rules::BoardRules;
