//! Game domain types: the move vocabulary and recorded rounds.

pub mod moves;
pub mod round;

pub use moves::{Move, ALL_MOVES, MOVE_COUNT};
pub use round::{HistoryError, Round};
