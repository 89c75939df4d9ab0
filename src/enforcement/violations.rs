//! Reasons a move can be refused.

use crate::core::Player;
use thiserror::Error;

/// One reason a move was not admissible.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MoveViolation {
    #[error("Cell {index} is off the board")]
    OutOfRange { index: usize },

    #[error("Game already won by {winner}")]
    GameOver { winner: Player },

    #[error("Cell {index} is already taken by {by}")]
    Occupied { index: usize, by: Player },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
