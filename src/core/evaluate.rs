//! Win detection.
//!
//! A pure function from a board to a verdict, with no dependency on game
//! state or presentation.

use super::board::{Board, Line, LINES};
use super::cell::Player;
use serde::{Deserialize, Serialize};

/// Verdict for a single board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum WinResult {
    NoWinner,
    /// `line` holds the exact three indices that won.
    Winner { player: Player, line: Line },
}

impl WinResult {
    pub fn player(&self) -> Option<Player> {
        match self {
            Self::NoWinner => None,
            Self::Winner { player, .. } => Some(*player),
        }
    }

    pub fn line(&self) -> Option<Line> {
        match self {
            Self::NoWinner => None,
            Self::Winner { line, .. } => Some(*line),
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, Self::Winner { .. })
    }
}

/// Find the first winning line on `board`.
///
/// Lines are scanned in [`LINES`] order, so when a constructed board holds
/// several complete lines the earliest one is reported.
///
/// # Example
///
/// ```rust
/// use tictactoe::core::{evaluate, Board, Player, WinResult};
///
/// let board = Board::empty()
///     .with_mark(2, Player::O)
///     .with_mark(4, Player::O)
///     .with_mark(6, Player::O);
///
/// assert_eq!(
///     evaluate(&board),
///     WinResult::Winner { player: Player::O, line: [2, 4, 6] }
/// );
/// assert_eq!(evaluate(&Board::empty()), WinResult::NoWinner);
/// ```
pub fn evaluate(board: &Board) -> WinResult {
    let cells = board.cells();
    LINES
        .iter()
        .find_map(|&[a, b, c]| {
            let player = cells[a].player()?;
            (cells[a] == cells[b] && cells[a] == cells[c])
                .then_some(WinResult::Winner { player, line: [a, b, c] })
        })
        .unwrap_or(WinResult::NoWinner)
}
